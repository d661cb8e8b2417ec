use crate::error::CliError;
use crate::util::{with_mapped_file, write_mapped_file};
use argh::FromArgs;
use bytesize::ByteSize;
use std::path::{Path, PathBuf};
use texcodec_bjson::{Document, DocumentError, DocumentRef, Validation};

#[derive(FromArgs, Debug)]
/// Convert a JSON text file to a binary JSON document
#[argh(subcommand, name = "json-to-bjson")]
pub struct JsonToBjsonCmd {
    /// input JSON file
    #[argh(option)]
    pub input: PathBuf,

    /// output binary JSON file
    #[argh(option)]
    pub output: PathBuf,
}

#[derive(FromArgs, Debug)]
/// Convert a binary JSON document to JSON text
#[argh(subcommand, name = "bjson-to-json")]
pub struct BjsonToJsonCmd {
    /// input binary JSON file
    #[argh(option)]
    pub input: PathBuf,

    /// output JSON file
    #[argh(option)]
    pub output: PathBuf,

    /// only check the header and root table, for files this tool wrote itself
    #[argh(switch)]
    pub no_validate: bool,

    /// indent the output
    #[argh(switch)]
    pub pretty: bool,
}

#[derive(FromArgs, Debug)]
/// Check binary JSON documents without converting them
#[argh(subcommand, name = "validate")]
pub struct ValidateCmd {
    /// binary JSON files to check
    #[argh(positional)]
    pub inputs: Vec<PathBuf>,
}

pub fn handle_json_to_bjson_command(cmd: JsonToBjsonCmd) -> Result<(), CliError> {
    let doc = with_mapped_file(&cmd.input, |text| {
        let tree: serde_json::Value =
            serde_json::from_slice(text).map_err(|source| CliError::Json {
                path: cmd.input.clone(),
                source,
            })?;
        Document::from_tree(&tree).map_err(|source| document_error(&cmd.input, source))
    })?;

    let bytes = doc.to_bytes();
    write_mapped_file(&cmd.output, &bytes)?;
    println!(
        "Wrote {} ({} {}, {})",
        cmd.output.display(),
        doc.len(),
        if doc.is_object() { "keys" } else { "items" },
        ByteSize(bytes.len() as u64)
    );
    Ok(())
}

pub fn handle_bjson_to_json_command(cmd: BjsonToJsonCmd) -> Result<(), CliError> {
    let validation = if cmd.no_validate {
        Validation::BypassValidation
    } else {
        Validation::Validate
    };

    let text = with_mapped_file(&cmd.input, |bytes| {
        let view = DocumentRef::from_raw_bytes(bytes, validation)
            .map_err(|source| document_error(&cmd.input, source))?;
        let tree = view.to_tree();
        let text = if cmd.pretty {
            serde_json::to_string_pretty(&tree)
        } else {
            serde_json::to_string(&tree)
        };
        text.map_err(|source| CliError::Json {
            path: cmd.input.clone(),
            source,
        })
    })?;

    write_mapped_file(&cmd.output, text.as_bytes())?;
    println!(
        "Wrote {} ({})",
        cmd.output.display(),
        ByteSize(text.len() as u64)
    );
    Ok(())
}

pub fn handle_validate_command(cmd: ValidateCmd) -> Result<(), CliError> {
    let mut failed = 0;
    for input in &cmd.inputs {
        match validate_file(input) {
            Ok(size) => println!("{}: ok ({})", input.display(), ByteSize(size as u64)),
            Err(e) => {
                failed += 1;
                eprintln!("{e}");
            }
        }
    }

    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: cmd.inputs.len(),
        });
    }
    Ok(())
}

/// Fully validates one document, returning its size without trailing bytes.
fn validate_file(path: &Path) -> Result<usize, CliError> {
    with_mapped_file(path, |bytes| {
        let view = DocumentRef::from_raw_bytes(bytes, Validation::Validate)
            .map_err(|source| document_error(path, source))?;
        let size = view.raw_bytes().len();
        if size < bytes.len() {
            tracing::debug!(
                "{}: ignoring {} trailing bytes",
                path.display(),
                bytes.len() - size
            );
        }
        Ok(size)
    })
}

fn document_error(path: &Path, source: DocumentError) -> CliError {
    CliError::Document {
        path: path.to_path_buf(),
        source,
    }
}
