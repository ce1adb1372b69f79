use anyhow::{bail, Result};
use clap::Args;
use eproc_lib::TaxIdClassifier;

use crate::output::{build_classification_row, print_classification, OutputFormat};

#[derive(Args)]
pub struct ClassifyArgs {
    /// CPF or CNPJ, masked or bare (e.g. 529.982.247-25)
    pub document: String,
}

pub fn run(args: &ClassifyArgs, format: &OutputFormat) -> Result<()> {
    let classifier = TaxIdClassifier::default();
    let kind = classifier.classify(&args.document)?;
    let Some(digits) = classifier.clean_mask_and_validate(&args.document) else {
        bail!("{} passed classification but not cleaning", args.document);
    };
    print_classification(build_classification_row(&args.document, &digits, kind), format)
}
