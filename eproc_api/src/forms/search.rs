use super::{Form, CASE_CLASS_IDS, DEFAULT_CASE_CLASS, FORM_URLENCODED_UTF8};

/// Quick search by case number. The portal answers with a redirect to the
/// lawsuit page.
#[derive(Debug, Clone)]
pub struct QuickSearchForm {
    pub number: String,
}

impl QuickSearchForm {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.trim().to_string(),
        }
    }
}

impl Form for QuickSearchForm {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("txtNumProcessoPesquisaRapida", self.number.clone()),
            ("acao_retorno_pesquisa_rapida", "processo_consultar".to_string()),
            ("btnPesquisaRapidaSubmit", String::new()),
        ]
    }
}

/// AJAX search for every lawsuit in which a tax ID (CPF/CNPJ) is a party.
///
/// The portal filters results by case class, so the form selects every class
/// in [`CASE_CLASS_IDS`] unless a narrower table is given.
#[derive(Debug, Clone)]
pub struct DocumentSearchForm {
    pub tax_id: String,
    pub case_classes: &'static [&'static str],
    pub include_archived: bool,
}

impl DocumentSearchForm {
    pub fn new(tax_id: &str) -> Self {
        Self {
            tax_id: tax_id.trim().to_string(),
            case_classes: CASE_CLASS_IDS,
            include_archived: true,
        }
    }

    pub fn with_case_classes(mut self, case_classes: &'static [&'static str]) -> Self {
        self.case_classes = case_classes;
        self
    }

    pub fn with_include_archived(mut self, include_archived: bool) -> Self {
        self.include_archived = include_archived;
        self
    }
}

impl Form for DocumentSearchForm {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("hdnInfraTipoPagina", "1".to_string()),
            ("acao_origem", String::new()),
            ("acao_retorno", String::new()),
            ("acao", "pesquisa_processo_doc_parte".to_string()),
            ("tipoPesquisa", "CP".to_string()),
            ("strDocParte", self.tax_id.clone()),
            ("selIdClasse", DEFAULT_CASE_CLASS.to_string()),
            ("selectAllselIdClasse", "on".to_string()),
        ];
        for class in self.case_classes {
            fields.push(("selectItemselIdClasse", class.to_string()));
        }
        fields.push(("selIdClasseSelecionados", self.case_classes.join(",")));
        if self.include_archived {
            fields.push(("chkExibirBaixados", "on".to_string()));
        }
        fields
    }

    fn content_type(&self) -> &'static str {
        FORM_URLENCODED_UTF8
    }
}
