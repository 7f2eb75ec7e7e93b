use std::io::{Error, ErrorKind, Result};

use chromaramp::config::Configuration;
use chromaramp::convert::hex_to_rounded_lch;
use chromaramp::palette::{GenerationStrategy, Section};

/// Build the configuration to render, either from the JSON file named on the
/// command line or a small built-in set of sections.
fn load() -> Result<Configuration> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(Configuration::from_json(&json)?)
        }
        None => Ok(Configuration::new(
            vec![
                Section::new("primary", "#3366ff").with_edges(true),
                Section::new("danger", "#d7282f").with_contrast(false),
                Section::new("neutral", "#777777").inverted(true),
            ],
            GenerationStrategy::FixedStep,
        )),
    }
}

fn main() -> Result<()> {
    let config = load()?;

    for section in config.sections.iter().filter(|section| !section.is_empty()) {
        let [l, c, h] = hex_to_rounded_lch(&section.color)
            .map_err(|err| Error::new(ErrorKind::InvalidData, err))?;
        println!("/* {}: {} is lch({} {} {}) */", section.name, section.color, l, c, h);
    }

    let css = config
        .to_css(":root")
        .map_err(|err| Error::new(ErrorKind::InvalidData, err))?;
    println!("{}", css);
    Ok(())
}
