use std::path::PathBuf;

use kdf_format::Delimiter;
use structopt::clap::AppSettings::*;
use structopt::StructOpt;
use tracing::Level;

mod commands;
mod error;

#[derive(Debug, StructOpt)]
struct Format {
    #[structopt(
        short,
        long,
        default_value = ",",
        help = "Field delimiter, matched literally"
    )]
    delimiter: Delimiter,
}

#[derive(Debug, StructOpt)]
struct Input {
    #[structopt(
        long,
        default_value = "utf-8",
        help = "Encoding of the input file (ASCII-compatible labels only)"
    )]
    encoding: String,

    #[structopt(long, help = "Reject lines with fewer fields than the header")]
    strict: bool,
}

#[derive(Debug, StructOpt)]
enum Commands {
    #[structopt(name = "keys", about = "Print the header keys of a file")]
    Keys {
        #[structopt(flatten)]
        format: Format,

        #[structopt(flatten)]
        input: Input,

        #[structopt(parse(from_os_str), help = "Path to the delimited file")]
        path: PathBuf,
    },

    #[structopt(name = "cat", about = "Print every record as a line of JSON")]
    Cat {
        #[structopt(flatten)]
        format: Format,

        #[structopt(flatten)]
        input: Input,

        #[structopt(parse(from_os_str), help = "Path to the delimited file")]
        path: PathBuf,
    },

    #[structopt(
        name = "append",
        visible_alias = "a",
        about = "Append a keyed line to a file"
    )]
    Append {
        #[structopt(flatten)]
        format: Format,

        #[structopt(long, help = "End lines with CRLF regardless of platform")]
        crlf: bool,

        #[structopt(parse(from_os_str), help = "Path to the delimited file")]
        path: PathBuf,

        #[structopt(help = "Key of the line")]
        key: String,

        #[structopt(help = "Values following the key")]
        values: Vec<String>,
    },

    #[structopt(name = "comment", about = "Append a comment line to a file")]
    Comment {
        #[structopt(flatten)]
        format: Format,

        #[structopt(long, help = "End lines with CRLF regardless of platform")]
        crlf: bool,

        #[structopt(
            short,
            long,
            help = "Replace the `#` prefix; an empty string writes no prefix"
        )]
        prefix: Option<String>,

        #[structopt(parse(from_os_str), help = "Path to the delimited file")]
        path: PathBuf,

        #[structopt(help = "Comment text")]
        text: String,
    },

    #[structopt(
        name = "copy",
        visible_alias = "cp",
        about = "Copy records into another file, keyed by the first column"
    )]
    Copy {
        #[structopt(flatten)]
        format: Format,

        #[structopt(flatten)]
        input: Input,

        #[structopt(long, help = "End lines with CRLF regardless of platform")]
        crlf: bool,

        #[structopt(parse(from_os_str), help = "File to read from")]
        source: PathBuf,

        #[structopt(parse(from_os_str), help = "File to append to")]
        destination: PathBuf,
    },
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "kdf",
    about = "Read and append keyed delimited text files.",
    settings = &[SubcommandRequiredElseHelp, DisableHelpSubcommand, VersionlessSubcommands]
)]
struct CliOpts {
    #[structopt(short, long, help = "Show verbose output", global = true)]
    verbose: bool,

    #[structopt(subcommand)]
    cmd: Commands,
}

fn run(cmd: Commands) -> error::Result<()> {
    match cmd {
        Commands::Keys {
            format,
            input,
            path,
        } => {
            let options = commands::reader_options(format.delimiter, &input.encoding, input.strict)?;
            commands::keys(&path, options)
        }
        Commands::Cat {
            format,
            input,
            path,
        } => {
            let options = commands::reader_options(format.delimiter, &input.encoding, input.strict)?;
            commands::cat(&path, options)
        }
        Commands::Append {
            format,
            crlf,
            path,
            key,
            values,
        } => commands::append(
            &path,
            commands::writer_options(format.delimiter, crlf),
            &key,
            &values,
        ),
        Commands::Comment {
            format,
            crlf,
            prefix,
            path,
            text,
        } => commands::comment(
            &path,
            commands::writer_options(format.delimiter, crlf),
            &text,
            prefix.as_deref(),
        ),
        Commands::Copy {
            format,
            input,
            crlf,
            source,
            destination,
        } => {
            let reader_options =
                commands::reader_options(format.delimiter.clone(), &input.encoding, input.strict)?;
            let writer_options = commands::writer_options(format.delimiter, crlf);
            commands::copy(&source, &destination, reader_options, writer_options)
        }
    }
}

fn main() {
    let opts = CliOpts::from_iter(wild::args_os());

    let level = if opts.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(opts.cmd) {
        eprintln!("{:?}", anyhow::Error::from(e));
        std::process::exit(1);
    }
}
