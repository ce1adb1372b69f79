use super::Form;

/// Request for the parties the lawsuit page does not render inline.
///
/// The three identifiers come from the page's `carregarPartes(...)` script call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenPartiesForm {
    pub process_id: String,
    pub person_id: String,
    pub party_type: String,
}

impl Form for HiddenPartiesForm {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("idProcesso", self.process_id.clone()),
            ("idPessoaCarregada", self.person_id.clone()),
            ("tipoParte", self.party_type.clone()),
            ("sinPermiteConsultaReuSobMonitoramento", "N".to_string()),
            ("sinPermiteCadastroReuSobMonitoramento", "N".to_string()),
        ]
    }
}
