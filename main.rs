use std::{io::Read, path::{Path, PathBuf}};
use clap::{Parser, Subcommand};

use apvocab::{Addressed, Context, Entity, Node, Resolver, LD};


#[derive(Parser)]
/// read, check and rewrite activitystreams documents
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

	#[arg(long)]
	/// maximum nesting of embedded objects, overrides config value
	max_depth: Option<usize>,

	#[arg(long, default_value_t=false)]
	/// fail on functional properties with unrecognized values, overrides config value
	strict: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	/// decode a document and print it serialized back
	Roundtrip {
		/// json document to read, `-` for stdin
		file: PathBuf,

		#[arg(long, default_value_t=false)]
		/// attach json-ld @context to output
		context: bool,

		#[arg(long, default_value_t=false)]
		/// pretty print output
		pretty: bool,
	},

	/// decode a document and describe what was recognized
	Inspect {
		/// json document to read, `-` for stdin
		file: PathBuf,
	},

	/// list every type this build knows
	Types,
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.with_writer(std::io::stderr)
		.init();

	let mut config = apvocab::Config::load(args.config.as_ref());
	if let Some(max_depth) = args.max_depth {
		config.decode.max_depth = max_depth;
	}
	if args.strict {
		config.decode.strict_functional = true;
	}

	if let Err(e) = run(args.command, config) {
		tracing::error!("{e}");
		std::process::exit(1);
	}
}

#[derive(Debug, thiserror::Error)]
enum CliError {
	#[error("failed reading document: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("failed serializing config: {0}")]
	Toml(#[from] toml::ser::Error),

	#[error(transparent)]
	Vocab(#[from] apvocab::VocabError),
}

fn run(mode: Mode, config: apvocab::Config) -> Result<(), CliError> {
	match mode {
		Mode::Config => println!("{}", toml::to_string_pretty(&config)?),

		Mode::Types => {
			for kind in Resolver::activitystreams().types() {
				let extends : Vec<&str> = kind.extends.iter().map(|x| x.name).collect();
				println!("{:<24} {:?}\textends [{}]", kind.name, kind.family, extends.join(", "));
			}
		},

		Mode::Roundtrip { file, context, pretty } => {
			let ctx = Context::new(config);
			let entity = ctx.deserialize(&read(&file)?)?;
			let mut out = ctx.serialize(&entity)?;
			if context {
				out = out.ld_context();
			}
			if pretty {
				println!("{}", serde_json::to_string_pretty(&out)?);
			} else {
				println!("{}", serde_json::to_string(&out)?);
			}
		},

		Mode::Inspect { file } => {
			let ctx = Context::new(config);
			let entity = ctx.deserialize(&read(&file)?)?;
			describe(&entity, 0);
			if entity.kind().family == apvocab::Family::Object {
				println!("public: {}", entity.is_public());
			}
		},
	}

	Ok(())
}

fn read(file: &Path) -> Result<serde_json::Value, CliError> {
	let raw = if file.as_os_str() == "-" {
		let mut buf = String::new();
		std::io::stdin().read_to_string(&mut buf)?;
		buf
	} else {
		std::fs::read_to_string(file)?
	};
	tracing::debug!("read {} bytes", raw.len());
	Ok(serde_json::from_str(&raw)?)
}

fn describe(entity: &Entity, indent: usize) {
	let pad = "  ".repeat(indent);
	println!("{pad}{} {}", entity.type_name(), entity.id().map(|x| x.as_str()).unwrap_or("<anonymous>"));
	for slot in entity.slots().filter(|s| !s.is_unset()) {
		for node in slot.iter() {
			match node.as_entity() {
				Some(inner) => {
					print!("{pad}  {}: ", slot.name());
					describe(inner, indent + 1);
				},
				None => println!("{pad}  {}: {}", slot.name(), kind(node)),
			}
		}
		for lang in slot.languages() {
			println!("{pad}  {}Map[{lang}]: {}", slot.name(), slot.lang(lang));
		}
	}
	for key in entity.unknown_keys() {
		println!("{pad}  {key}: <unknown>");
	}
}

fn kind(node: &Node) -> String {
	match node {
		Node::Object(x) | Node::Link(x) => x.type_name().to_string(),
		Node::Endpoints(_) => "endpoints".to_string(),
		Node::PublicKey(x) => format!("key of {}", x.owner.as_ref().map(|x| x.as_str()).unwrap_or("nobody")),
		Node::DateTime(x) => format!("date {x}"),
		Node::Duration(x) => format!("duration {x}"),
		Node::Float(x) => format!("float {x}"),
		Node::Integer(x) => format!("integer {x}"),
		Node::Boolean(x) => format!("boolean {x}"),
		Node::LangString(x) => format!("text @{}", x.language),
		Node::Str(x) => format!("string {x:?}"),
		Node::Iri(x) => format!("iri {x}"),
		Node::Unknown(x) => format!("<unknown> {x}"),
	}
}
