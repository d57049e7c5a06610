//! LSP (Language Server Protocol) backend implementation for SAS checking

use std::collections::HashMap;
use std::sync::Arc;

use sascheck_core::lang::categories;
use sascheck_syntax::{Report, finding_message, help_for, scan};
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::lsp::diagnostics::{DocumentLines, report_to_diagnostics};

/// Document state stored by the LSP
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub source: String,
    pub report: Report,
    /// Version the report was computed from
    pub version: i32,
}

/// Whether an analysis of `incoming` would overwrite a newer stored version.
pub fn is_stale(stored: Option<i32>, incoming: i32) -> bool {
    stored.is_some_and(|version| version > incoming)
}

/// SAS Language Server
pub struct SasLanguageServer {
    client: Client,
    documents: Arc<RwLock<HashMap<Url, DocumentState>>>,
}

impl SasLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Scan a document and publish diagnostics
    async fn analyze_document(&self, uri: &Url, source: String, version: i32) {
        let report = scan(&source);
        let diagnostics = report_to_diagnostics(&report, &source);
        tracing::debug!(%uri, version, findings = diagnostics.len(), "analyzed document");

        {
            let mut docs = self.documents.write().await;
            if is_stale(docs.get(uri).map(|doc| doc.version), version) {
                tracing::debug!(%uri, version, "dropping stale analysis");
                return;
            }
            docs.insert(
                uri.clone(),
                DocumentState {
                    source,
                    report,
                    version,
                },
            );
        }

        // Publish diagnostics (even if empty, to clear old ones)
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(version))
            .await;
    }
}

/// Markdown describing the findings anchored at a 1-based line, if any.
///
/// Findings are matched on the same line their diagnostics are drawn on, so whole-file findings without a line of
/// their own show up on the last line.
pub fn hover_markdown(report: &Report, lines: &DocumentLines<'_>, line: usize) -> Option<String> {
    let mut sections = Vec::new();

    for (category, findings) in report.iter() {
        for finding in findings.iter().filter(|f| lines.anchor_line(f) == line) {
            let mut section = format!(
                "**{}** (`{}`)\n\n{}",
                categories::heading(category),
                categories::as_str(category),
                finding_message(category, finding)
            );
            if let Some(help) = help_for(category) {
                section.push_str(&format!("\n\n_help_: {help}"));
            }
            sections.push(section);
        }
    }

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n---\n\n"))
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for SasLanguageServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Real-time diagnostics via text sync
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                // Finding details on flagged lines
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "sascheck-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "sascheck LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let source = params.text_document.text;
        let version = params.text_document.version;

        self.analyze_document(&uri, source, version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // We use FULL sync, so there's only one change with the full content
        if let Some(change) = params.content_changes.into_iter().next() {
            self.analyze_document(&uri, change.text, version).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        // Remove document from cache
        let mut docs = self.documents.write().await;
        docs.remove(&uri);

        // Clear diagnostics
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };

        let lines = DocumentLines::new(&doc.source);
        let line = position.line as usize + 1;
        Ok(hover_markdown(&doc.report, &lines, line).map(|value| Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            }),
            range: Some(lines.line_range(line)),
        }))
    }
}
