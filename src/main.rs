use clap::Parser;
use fruitcss::error::{Error, FruitError};
use fruitcss::parser::{FruitKind, FruitOptions, IrrelevantProperty, ParseDeepLevel};
use fruitcss::printer::PrinterOptions;
use fruitcss::properties::background::Background;
use fruitcss::properties::{Declaration, Property};
use fruitcss::traits::{Outcome, ToCss};
use std::{fs, io};

#[derive(Parser, Debug)]
#[clap(author, about, long_about = None)]
struct CliArgs {
  /// Property name, e.g. background-position
  #[clap(required_unless_present = "input_file")]
  property: Option<String>,
  /// Property value
  #[clap(required_unless_present = "input_file")]
  value: Option<String>,
  /// File with one `property: value` declaration per line, merged into a single background
  #[clap(short, long, conflicts_with_all = &["property", "value"])]
  input_file: Option<String>,
  /// How deep values are returned as structures
  #[clap(long, default_value = "virtual-longhand")]
  deep_level: ParseDeepLevel,
  /// Value types that are always returned as structures
  #[clap(long)]
  force: Vec<FruitKind>,
  /// Fail on invalid values instead of printing nothing
  #[clap(long)]
  throw_errors: bool,
  /// Fail on properties other than the background properties
  #[clap(long)]
  strict_properties: bool,
  /// Write every component instead of the shortest form
  #[clap(short, long)]
  complete: bool,
  /// Print the structured value as JSON
  #[clap(long)]
  json: bool,
}

pub fn main() -> Result<(), io::Error> {
  env_logger::init();
  let cli_args = CliArgs::parse();

  let mut options = FruitOptions {
    parse_deep_level: cli_args.deep_level,
    throw_errors: cli_args.throw_errors,
    ..FruitOptions::default()
  };
  for kind in &cli_args.force {
    options.force_parsing |= kind.flag();
  }
  if cli_args.strict_properties {
    options.irrelevant_property = IrrelevantProperty::Error;
  }
  let printer_options = PrinterOptions {
    complete: cli_args.complete,
  };

  let res = match &cli_args.input_file {
    Some(input_file) => {
      let source = fs::read_to_string(input_file)?;
      absorb_file(&source, &options).map(|background| Some(Outcome::Structured(Property::Background(background))))
    }
    None => Property::parse(
      cli_args.property.as_deref().unwrap_or_default(),
      cli_args.value.as_deref().unwrap_or_default(),
      &options,
    ),
  };

  let outcome = match res {
    Ok(Some(outcome)) => outcome,
    Ok(None) => return Ok(()),
    Err(err) => {
      eprintln!("{}", err);
      std::process::exit(1);
    }
  };

  if cli_args.json {
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    return Ok(());
  }

  match outcome {
    Outcome::Structured(property) => match property.to_css_string(printer_options) {
      Ok(css) => println!("{}", css),
      Err(err) => {
        eprintln!("{}", err);
        std::process::exit(1);
      }
    },
    Outcome::Canonical(css) => println!("{}", css),
  }

  Ok(())
}

fn absorb_file(source: &str, options: &FruitOptions) -> Result<Background, Error<FruitError>> {
  let declarations: Vec<Declaration> = source
    .lines()
    .map(|line| line.trim().trim_end_matches(';'))
    .filter(|line| !line.is_empty())
    .filter_map(|line| {
      let (property, value) = line.split_once(':')?;
      Some(Declaration::new(property.trim(), value.trim()))
    })
    .collect();

  let mut background = Background::default();
  background.absorb_all(&declarations, options)?;
  Ok(background)
}
