use std::io::Read;
use std::path::PathBuf;
use clap::{Parser, Subcommand};

use asterm::{Node, Term, LD};

mod config;
use config::Config;


#[derive(Parser)]
/// inspect and normalize activitystreams documents
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	/// resolve a document and show how each of its properties was classified
	Inspect {
		/// json file to read, '-' for stdin
		input: PathBuf,
	},

	/// resolve a document and print it back serialized
	Roundtrip {
		/// json file to read, '-' for stdin
		input: PathBuf,
	},
}

#[derive(Debug, thiserror::Error)]
enum CliError {
	#[error("could not read input: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("could not process document: {0}")]
	Term(#[from] asterm::Error),
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = Config::load(args.config.as_ref());

	let res = match args.command {
		Mode::Config => toml::to_string_pretty(&config)
			.map(|x| println!("{x}"))
			.map_err(|e| tracing::error!("failed serializing config: {e}"))
			.ok(),
		Mode::Inspect { input } => report(inspect(&config, &input)),
		Mode::Roundtrip { input } => report(roundtrip(&config, &input)),
	};

	if res.is_none() {
		std::process::exit(1);
	}
}

fn report(res: Result<(), CliError>) -> Option<()> {
	match res {
		Ok(()) => Some(()),
		Err(CliError::Term(e)) if !e.path().is_empty() => {
			tracing::error!("{} (at '{}')", e.root_cause(), e.path());
			None
		},
		Err(e) => {
			tracing::error!("{e}");
			None
		},
	}
}

fn load(config: &Config, input: &PathBuf) -> Result<Term, CliError> {
	let text = if input.as_os_str() == "-" {
		let mut buf = String::new();
		std::io::stdin().read_to_string(&mut buf)?;
		buf
	} else {
		std::fs::read_to_string(input)?
	};
	let value: serde_json::Value = serde_json::from_str(&text)?;
	let term = if config.parse.strict_root {
		asterm::resolve_strict(&value)?
	} else {
		asterm::resolve(&value)?
	};
	tracing::debug!("resolved document as {}", term.kind());
	Ok(term)
}

fn inspect(config: &Config, input: &PathBuf) -> Result<(), CliError> {
	let term = load(config, input)?;
	describe(&term, 0);
	Ok(())
}

fn describe(term: &Term, indent: usize) {
	let pad = "  ".repeat(indent);
	println!("{pad}{} [{}]", term.kind(), term.types().join(", "));
	for (key, node) in term.properties() {
		describe_node(key, node, indent + 1);
	}
	for def in term.declared() {
		if let Some(map) = term.language_map(def.name) {
			let languages: Vec<&str> = map.keys().map(|x| x.as_str()).collect();
			println!("{pad}  {}Map: [{}]", def.name, languages.join(", "));
		}
	}
	for key in term.unknown().keys() {
		println!("{pad}  {key}: unknown field");
	}
}

fn describe_node(key: &str, node: &Node, indent: usize) {
	let pad = "  ".repeat(indent);
	for value in node {
		match value.as_term() {
			Some(inner) => {
				println!("{pad}{key}: {}", value.alternative());
				describe(inner, indent + 1);
			},
			None => println!("{pad}{key}: {}", value.alternative()),
		}
	}
}

fn roundtrip(config: &Config, input: &PathBuf) -> Result<(), CliError> {
	let term = load(config, input)?;
	let mut value = serde_json::Value::Object(term.serialize()?);
	if config.output.with_context {
		value = value.ld_context();
	}
	let text = if config.output.pretty {
		serde_json::to_string_pretty(&value)?
	} else {
		serde_json::to_string(&value)?
	};
	println!("{text}");
	Ok(())
}
