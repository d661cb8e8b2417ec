use crate::error::CliError;
use crate::util::{collect_texture_inputs, for_each_path, Throughput};
use argh::FromArgs;
use bytesize::ByteSize;
use core::fmt::Write;
use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};
use texcodec_texture_api::{load_texture_from_path, LoadOptions, LoadedTexture};

#[derive(FromArgs, Debug)]
/// Decode texture containers (DDS, KTX, PKM, HDR) and print what they hold
#[argh(subcommand, name = "inspect")]
pub struct InspectCmd {
    /// texture file, or directory to search recursively
    #[argh(positional)]
    pub input: PathBuf,

    /// warn about textures with array layers or depth
    #[argh(switch)]
    pub no_3d: bool,
}

pub fn handle_inspect_command(cmd: InspectCmd) -> Result<(), CliError> {
    let files = collect_texture_inputs(&cmd.input)?;
    if files.is_empty() {
        println!("No textures found in {}", cmd.input.display());
        return Ok(());
    }
    tracing::info!("Inspecting {} files", files.len());

    let options = LoadOptions::new().with_allow_3d(!cmd.no_3d);
    let start = Instant::now();
    let payload_bytes = AtomicU64::new(0);
    let failed = AtomicU64::new(0);

    for_each_path(&files, |path| match inspect_file(path, &options) {
        Ok((summary, payload_len)) => {
            payload_bytes.fetch_add(payload_len, Ordering::Relaxed);
            println!("{summary}");
        }
        Err(e) => {
            failed.fetch_add(1, Ordering::Relaxed);
            eprintln!("{e}");
        }
    });

    let elapsed = start.elapsed();
    let total_bytes = payload_bytes.load(Ordering::Relaxed);
    println!(
        "\nDecoded {} of payload in {elapsed:.2?} ({})",
        ByteSize(total_bytes),
        Throughput::measure(total_bytes, elapsed)
    );

    match failed.load(Ordering::Relaxed) {
        0 => Ok(()),
        failed => Err(CliError::PartialFailure {
            failed,
            total: files.len(),
        }),
    }
}

/// Loads one texture and describes it on a single line.
fn inspect_file(path: &Path, options: &LoadOptions) -> Result<(String, u64), CliError> {
    let loaded = load_texture_from_path(path, options, None).map_err(|source| CliError::Texture {
        path: path.to_path_buf(),
        source,
    })?;
    let payload_len = loaded.texture.payload().len() as u64;
    Ok((describe(path, &loaded), payload_len))
}

fn describe(path: &Path, loaded: &LoadedTexture) -> String {
    let texture = &loaded.texture;
    let mut line = format!(
        "{}: {:?} {:?}, {}x{}x{}, {} layer(s), {} face(s), {} mip(s), {}",
        path.display(),
        texture.target(),
        texture.format(),
        texture.width(),
        texture.height(),
        texture.depth(),
        texture.layers(),
        texture.faces(),
        texture.mip_levels(),
        ByteSize(texture.payload().len() as u64),
    );
    if texture.is_compressed() {
        let _ = write!(line, ", {} byte blocks", texture.block_size());
    }
    for warning in &loaded.warnings {
        let _ = write!(line, " [warning: {warning:?}]");
    }
    line
}
