use eproc_api::forms::{CASE_CLASS_IDS, FORM_URLENCODED, FORM_URLENCODED_UTF8};
use eproc_api::{DocumentSearchForm, Form, HiddenPartiesForm, QuickSearchForm};

#[test]
fn test_quick_search_fields_in_order() {
    let body = QuickSearchForm::new(" 5001234-56.2023.8.21.0001 ").encode();
    assert_eq!(
        body,
        "txtNumProcessoPesquisaRapida=5001234-56.2023.8.21.0001\
         &acao_retorno_pesquisa_rapida=processo_consultar\
         &btnPesquisaRapidaSubmit="
    );
    assert_eq!(QuickSearchForm::new("1").content_type(), FORM_URLENCODED);
}

#[test]
fn test_hidden_parties_form_flags() {
    let form = HiddenPartiesForm {
        process_id: "1234567".into(),
        person_id: "890".into(),
        party_type: "R".into(),
    };
    assert_eq!(
        form.encode(),
        "idProcesso=1234567&idPessoaCarregada=890&tipoParte=R\
         &sinPermiteConsultaReuSobMonitoramento=N\
         &sinPermiteCadastroReuSobMonitoramento=N"
    );
}

#[test]
fn test_document_search_header_fields() {
    let body = DocumentSearchForm::new("11222333000181").encode();
    assert!(body.starts_with(
        "hdnInfraTipoPagina=1&acao_origem=&acao_retorno=&acao=pesquisa_processo_doc_parte\
         &tipoPesquisa=CP&strDocParte=11222333000181&selIdClasse=0000100000&selectAllselIdClasse=on\
         &selectItemselIdClasse=0000100000&"
    ));
    assert!(body.ends_with("&chkExibirBaixados=on"));
}

#[test]
fn test_document_search_selects_every_class() {
    let form = DocumentSearchForm::new("11222333000181");
    let fields = form.fields();
    let items = fields
        .iter()
        .filter(|(name, _)| *name == "selectItemselIdClasse")
        .count();
    assert_eq!(items, CASE_CLASS_IDS.len());

    let (_, selected) = fields
        .iter()
        .find(|(name, _)| *name == "selIdClasseSelecionados")
        .unwrap();
    assert_eq!(selected.split(',').count(), CASE_CLASS_IDS.len());
    assert!(form.encode().contains("selIdClasseSelecionados=0000100000%2C0000000452%2C"));
    assert_eq!(form.content_type(), FORM_URLENCODED_UTF8);
}

#[test]
fn test_document_search_narrowed() {
    const CLASSES: &[&str] = &["0000000001", "0000000002"];
    let body = DocumentSearchForm::new("52998224725")
        .with_case_classes(CLASSES)
        .with_include_archived(false)
        .encode();
    assert!(body.contains(
        "selectItemselIdClasse=0000000001&selectItemselIdClasse=0000000002\
         &selIdClasseSelecionados=0000000001%2C0000000002"
    ));
    assert!(!body.contains("chkExibirBaixados"));
}
