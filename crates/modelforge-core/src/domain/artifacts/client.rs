//! `client/`: routed pages, the root layout, data hooks and components.

use std::collections::HashSet;

use tracing::debug;

use super::{CompileContext, file, ts_string};
use crate::domain::{
    entities::{
        file_tree::FileTreeItem,
        system_model::{ApiCall, ComponentSpec, Page, StateSpec},
    },
    naming::{to_camel_case, to_pascal_case},
    route_tree::{materialize_files, route_key},
};

/// Always emitted; a declared component with the same name is skipped.
pub const BUTTON_COMPONENT: &str = "Button";

pub fn client(ctx: &CompileContext<'_>) -> FileTreeItem {
    FileTreeItem::folder(
        "client",
        vec![
            FileTreeItem::folder("app", app(ctx)),
            FileTreeItem::folder("components", components(ctx)),
            FileTreeItem::folder("hooks", hooks(&ctx.pages)),
        ],
    )
}

fn app(ctx: &CompileContext<'_>) -> Vec<FileTreeItem> {
    let pages = &ctx.pages;
    let mut items = materialize_files(pages.iter().map(|p| p.path.as_str()), |path| {
        let key = route_key(path);
        pages
            .iter()
            .rev()
            .find(|p| route_key(&p.path) == key)
            .map(page_source)
            .unwrap_or_default()
    });
    items.push(file("layout.tsx", layout(ctx)));
    items
}

/// Precomputed code if present, otherwise a stub.
pub fn page_source(page: &Page) -> String {
    match page.code.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(code) => code.to_string(),
        None => page_stub(page),
    }
}

fn page_stub(page: &Page) -> String {
    let name = page.display_name();
    let component = match to_pascal_case(&name) {
        p if p.is_empty() => "Page".to_string(),
        p => format!("{p}Page"),
    };
    let layout = page.layout.as_deref().unwrap_or("default");

    let mut out = String::new();
    if !page.state().is_empty() {
        out.push_str("'use client';\n\nimport { useState } from 'react';\n\n");
    }
    out.push_str(&format!("// Route: {}\n// Layout: {layout}\n", page.path));
    out.push_str(&format!("export default function {component}() {{\n"));
    for state in page.state() {
        out.push_str(&format!("  {}\n", state_line(state)));
    }
    if !page.state().is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "  return (\n    <main data-layout={}>\n      <h1>{{{}}}</h1>\n      <p>{{{}}}</p>\n    </main>\n  );\n}}\n",
        ts_string(layout),
        ts_string(&name),
        ts_string(page.description()),
    ));
    out
}

/// `const [name, setName] = useState<T>(initial);`
fn state_line(state: &StateSpec) -> String {
    let var = match to_camel_case(&state.name) {
        v if v.is_empty() => "value".to_string(),
        v => v,
    };
    let setter = format!("set{}", to_pascal_case(&var));
    let type_param = state
        .type_hint
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(|t| format!("<{t}>"))
        .unwrap_or_default();
    let initial = state
        .initial
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or("null");
    format!("const [{var}, {setter}] = useState{type_param}({initial});")
}

fn layout(ctx: &CompileContext<'_>) -> String {
    let model = ctx.model;
    let font = format!("'{}', sans-serif", model.font_family().replace('\'', ""));
    format!(
        "import type {{ Metadata }} from 'next';\nimport type {{ ReactNode }} from 'react';\n\n\
         export const metadata: Metadata = {{\n  title: {},\n  description: {},\n}};\n\n\
         export default function RootLayout({{ children }}: {{ children: ReactNode }}) {{\n  \
         return (\n    <html lang=\"en\">\n      <body style={{{{ fontFamily: {} }}}}>{{children}}</body>\n    </html>\n  );\n}}\n",
        ts_string(model.name()),
        ts_string(model.description()),
        ts_string(&font),
    )
}

/// Hook name for an API call: `use` + Pascal of the trigger, falling back to
/// the method and endpoint when the trigger has no usable characters.
pub fn hook_name(call: &ApiCall) -> String {
    let mut base = to_pascal_case(&call.trigger);
    if base.is_empty() {
        base = to_pascal_case(&format!("{} {}", call.method, call.endpoint));
    }
    if base.is_empty() {
        base = "Request".into();
    }
    format!("use{base}")
}

fn hooks(pages: &[Page]) -> Vec<FileTreeItem> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for call in pages.iter().flat_map(Page::api_calls) {
        let name = hook_name(call);
        if !seen.insert(name.clone()) {
            debug!(hook = %name, "Duplicate hook name, keeping first");
            continue;
        }
        out.push(file(format!("{name}.ts"), hook_source(&name, call)));
    }
    out
}

fn hook_source(name: &str, call: &ApiCall) -> String {
    let method = match call.method.trim() {
        "" => "GET".to_string(),
        m => m.to_ascii_uppercase(),
    };
    let on_success = note(call.on_success.as_deref(), "on success");
    let on_error = note(call.on_error.as_deref(), "on error");

    format!(
        r#"import {{ useCallback, useState }} from 'react';

export function {name}() {{
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState<Error | null>(null);
  const [data, setData] = useState<unknown>(null);

  const execute = useCallback(async (body?: unknown) => {{
    setLoading(true);
    setError(null);
    try {{
      const res = await fetch({endpoint}, {{
        method: {method},
        headers: {{ 'Content-Type': 'application/json' }},
        body: body === undefined ? undefined : JSON.stringify(body),
      }});
      if (!res.ok) throw new Error(`Request failed with status ${{res.status}}`);
      const json = await res.json();
      setData(json);
{on_success}      return json;
    }} catch (err) {{
      setError(err as Error);
{on_error}      throw err;
    }} finally {{
      setLoading(false);
    }}
  }}, []);

  return {{ loading, error, data, execute }};
}}
"#,
        endpoint = ts_string(&call.endpoint),
        method = ts_string(&method),
    )
}

/// One comment line per line of handling text, or nothing.
fn note(text: Option<&str>, label: &str) -> String {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => text
            .lines()
            .map(|l| format!("      // {label}: {l}\n"))
            .collect(),
        None => String::new(),
    }
}

fn components(ctx: &CompileContext<'_>) -> Vec<FileTreeItem> {
    let mut seen: HashSet<String> = HashSet::from([BUTTON_COMPONENT.to_string()]);
    let mut out = Vec::new();

    for spec in ctx.pages.iter().flat_map(Page::components) {
        let name = to_pascal_case(&spec.name);
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        out.push(file(format!("{name}.tsx"), component_stub(&name, spec)));
    }

    out.push(file(
        format!("{BUTTON_COMPONENT}.tsx"),
        button(ctx.model.primary_color()),
    ));
    out
}

fn component_stub(name: &str, spec: &ComponentSpec) -> String {
    let mut out = String::new();
    if let Some(description) = spec.description.as_deref().filter(|d| !d.is_empty()) {
        for line in description.lines() {
            out.push_str(&format!("// {line}\n"));
        }
    }

    out.push_str(&format!("export interface {name}Props {{\n"));
    let mut props = HashSet::new();
    for prop in spec.props() {
        let prop = to_camel_case(prop);
        if !prop.is_empty() && props.insert(prop.clone()) {
            out.push_str(&format!("  {prop}?: unknown;\n"));
        }
    }
    out.push_str("}\n\n");

    out.push_str(&format!(
        "export function {name}(props: {name}Props) {{\n  return <div data-component={}>{{JSON.stringify(props)}}</div>;\n}}\n",
        ts_string(name),
    ));
    out
}

fn button(primary_color: &str) -> String {
    format!(
        r#"import type {{ ButtonHTMLAttributes }} from 'react';

const PRIMARY_COLOR = {};

export function Button({{ style, ...props }}: ButtonHTMLAttributes<HTMLButtonElement>) {{
  return (
    <button
      {{...props}}
      style={{{{
        backgroundColor: PRIMARY_COLOR,
        color: '#ffffff',
        border: 'none',
        borderRadius: 6,
        padding: '8px 16px',
        ...style,
      }}}}
    />
  );
}}
"#,
        ts_string(primary_color)
    )
}
