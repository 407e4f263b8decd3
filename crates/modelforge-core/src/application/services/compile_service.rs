//! Compile Service - the model-to-artifact compiler.
//!
//! Assembles the fixed top-level layout:
//!
//! ```text
//! documentation/   database/   server/   client/   .gitignore   README.md
//! ```
//!
//! The server section is generated before documentation because the
//! component diagram is derived from the server files that were actually
//! produced.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::BomGenerator,
    domain::{
        FileTree, SystemModel,
        artifacts::{
            CompileContext, client::client, database::database, documentation::documentation,
            gitignore, readme, server::server,
        },
    },
};

/// Stateless compiler. Safe to share between threads and call repeatedly.
pub struct CompileService {
    bom: Box<dyn BomGenerator>,
}

impl CompileService {
    /// Create a compile service with the given bill-of-materials generator.
    pub fn new(bom: Box<dyn BomGenerator>) -> Self {
        Self { bom }
    }

    /// Compile a model into a fresh artifact tree.
    ///
    /// Never fails: absent sections of the model produce empty folders or
    /// placeholder content.
    #[instrument(
        skip_all,
        fields(
            system = %model.name(),
            entities = model.entities().len(),
            pages = model.prototype_pages().len() + model.screens().len()
        )
    )]
    pub fn compile(&self, model: &SystemModel) -> FileTree {
        let ctx = CompileContext::new(model);
        debug!(merged_pages = ctx.pages.len(), "Context prepared");

        let server = server(&ctx);
        debug!(files = server.file_count(), "Server section generated");

        let bill_of_materials = self.bom.generate(model);
        let documentation = documentation(&ctx, &server, bill_of_materials);
        debug!(files = documentation.file_count(), "Documentation generated");

        let database = database(&ctx);
        debug!(files = database.file_count(), "Database section generated");

        let client = client(&ctx);
        debug!(files = client.file_count(), "Client section generated");

        let tree = FileTree::new(vec![
            documentation,
            database,
            server,
            client,
            gitignore(),
            readme(&ctx),
        ]);

        info!(files = tree.file_count(), "Compilation finished");
        tree
    }
}
