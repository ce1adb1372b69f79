use serde::{Deserialize, Serialize};

/// JSON body of the document-search AJAX call.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DocumentSearchResponse {
    #[serde(default)]
    pub resultados: Vec<DocumentSearchResult>,
}

/// One lawsuit found by the document search.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSearchResult {
    /// Signed lawsuit link, relative to the portal directory.
    pub link_processo_assinado: String,
}
