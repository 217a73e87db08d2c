use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use codelist_cli::summary::items_table;
use codelist_editor::prepare;
use codelist_ingest::{read_code_list, read_upload, to_json_string, write_code_list};
use codelist_model::{CodeList, EditorOptions, ValueType};
use codelist_transform::infer_value_type;
use codelist_validate::{ValidationReport, validate_code_list};

use crate::cli::{EditorArgs, FileArgs, NormalizeArgs, ShowArgs, ValidateArgs, ValueTypeArg};

/// Result of the `validate` command.
pub struct ValidateResult {
    pub report: ValidationReport,
    /// The list the report refers to, in the form it would be committed.
    pub list: CodeList,
}

pub fn run_infer(args: &FileArgs) -> Result<Option<ValueType>> {
    let list = load(&args.file)?;
    Ok(infer_value_type(&list))
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let span = info_span!("normalize", file = %args.input.file.display());
    let _guard = span.enter();

    let list = load(&args.input.file)?;
    let options = editor_options(&args.editor);
    let normalized = prepare(&list, &options).context("normalize code list")?;
    match &args.output {
        Some(path) => write_code_list(path, &normalized)
            .with_context(|| format!("write {}", path.display()))?,
        None => println!("{}", to_json_string(&normalized).context("serialize code list")?),
    }
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let span = info_span!("validate", file = %args.input.file.display());
    let _guard = span.enter();

    let path = &args.input.file;
    let (title, list) = if args.upload {
        let upload =
            read_upload(path).with_context(|| format!("read upload {}", path.display()))?;
        (Some(upload.id), upload.code_list)
    } else {
        let title = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string);
        (title, load(path)?)
    };

    let options = editor_options(&args.editor);
    let prepared = prepare(&list, &options).context("prepare code list for validation")?;
    let report = validate_code_list(title.as_deref(), &prepared);
    debug!(errors = report.error_count(), "validated code list");
    Ok(ValidateResult {
        report,
        list: prepared,
    })
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let list = load(&args.input.file)?;
    let options = editor_options(&args.editor);
    let table = items_table(&list, &args.language, options.fallback_language());
    println!("{table}");
    Ok(())
}

/// Map CLI flags onto editor options.
pub fn editor_options(args: &EditorArgs) -> EditorOptions {
    let base = if args.strict {
        EditorOptions::strict()
    } else {
        EditorOptions::default()
    };
    let options = base
        .with_value_type(args.value_type.map(value_type))
        .with_normalize_on_commit(!args.no_normalize);
    match &args.fallback_language {
        Some(language) => options.with_fallback_language(Some(language.clone())),
        None => options,
    }
}

fn value_type(arg: ValueTypeArg) -> ValueType {
    match arg {
        ValueTypeArg::String => ValueType::String,
        ValueTypeArg::Number => ValueType::Number,
        ValueTypeArg::Boolean => ValueType::Boolean,
    }
}

fn load(path: &Path) -> Result<CodeList> {
    read_code_list(path).with_context(|| format!("read {}", path.display()))
}
