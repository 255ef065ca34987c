use clap::{arg, crate_version, Command};
use lzip::{cli, Error, Options, DYNERR, STD_OPTIONS};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn do_compress(input: &Path, output: &Path, max_code_len: u16) -> Result<(), DYNERR> {
    cli::confirm_overwrite(output)?;
    let mut src = File::open(input).map_err(Error::OpenFailed)?;
    let mut dst = File::create(output).map_err(Error::OpenFailed)?;
    let opt = Options {
        max_code_len,
        ..STD_OPTIONS
    };
    let started = Instant::now();
    let (original_size, archive_size) = lzip::compress(&mut src, &mut dst, &opt)?;
    let elapsed = started.elapsed();
    let ratio = if original_size > 0 {
        100.0 * archive_size as f64 / original_size as f64
    } else {
        100.0
    };
    log::info!(
        "{} -> {} ({original_size} -> {archive_size} bytes, {ratio:.1}%) in {:.2?}",
        input.display(),
        output.display(),
        elapsed
    );
    Ok(())
}

fn do_expand(input: &Path, output: &Path) -> Result<(), DYNERR> {
    cli::confirm_overwrite(output)?;
    let mut src = File::open(input).map_err(Error::OpenFailed)?;
    let mut dst = File::create(output).map_err(Error::OpenFailed)?;
    let started = Instant::now();
    let (archive_size, original_size) = lzip::expand(&mut src, &mut dst, &STD_OPTIONS)?;
    let elapsed = started.elapsed();
    log::info!(
        "{} -> {} ({archive_size} -> {original_size} bytes) in {:.2?}",
        input.display(),
        output.display(),
        elapsed
    );
    Ok(())
}

fn run() -> Result<(), DYNERR> {
    let long_help = "Examples:
---------
Compress:   `lzip c notes.txt`            writes notes.txt.lzip
Expand:     `lzip d notes.txt.lzip`       writes notes.txt";

    let cmd = Command::new("lzip")
        .about("length-limited canonical Huffman file compressor")
        .after_long_help(long_help)
        .version(crate_version!())
        .disable_version_flag(true)
        .arg(arg!(-v --version "print version information").action(clap::ArgAction::SetTrue))
        .subcommand(
            Command::new("c")
                .about("compress a file")
                .arg(arg!(<input> "input file path"))
                .arg(arg!([output] "output file path"))
                .arg(
                    arg!(--"max-code-len" <BITS> "maximum canonical code length in bits")
                        .value_parser(clap::value_parser!(u16))
                        .default_value("24"),
                ),
        )
        .subcommand(
            Command::new("d")
                .about("decompress a file")
                .arg(arg!(<input> "input file path"))
                .arg(arg!([output] "output file path")),
        );

    let matches = cmd.get_matches();

    if matches.get_flag("version") {
        println!("lzip {}", crate_version!());
        return Ok(());
    }

    if let Some(sub) = matches.subcommand_matches("c") {
        let input = PathBuf::from(sub.get_one::<String>("input").expect("required"));
        let input = cli::normalize_path(&input)?;
        let output = match sub.get_one::<String>("output") {
            Some(o) => cli::normalize_path(&PathBuf::from(o))?,
            None => cli::default_output_path(&input, true),
        };
        let max_code_len = *sub.get_one::<u16>("max-code-len").expect("has default");
        return do_compress(&input, &output, max_code_len);
    }

    if let Some(sub) = matches.subcommand_matches("d") {
        let input = PathBuf::from(sub.get_one::<String>("input").expect("required"));
        let input = cli::normalize_path(&input)?;
        let output = match sub.get_one::<String>("output") {
            Some(o) => cli::normalize_path(&PathBuf::from(o))?,
            None => cli::default_output_path(&input, false),
        };
        return do_expand(&input, &output);
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let exit_code = match run() {
        Ok(()) => 0,
        Err(e) => {
            if e.downcast_ref::<Error>()
                .map(|err| matches!(err, Error::UserCancelled))
                .unwrap_or(false)
            {
                0
            } else {
                eprintln!("error: {e}");
                1
            }
        }
    };
    std::process::exit(exit_code);
}
