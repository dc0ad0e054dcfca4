//! Contrast checking and shade-ladder command line tool.
//!
//! # Usage
//!
//! ```text
//! legible check <background> <foreground> [--enforce <aa-large|aa|aaa>]
//! legible suggest <background> [--level <aa-large|aa|aaa>] [--max-ratio <ratio>]
//! legible shade <background> <tier> [--dark]
//! legible ladder <background> [--dark]
//! ```
//!
//! Colors accept `#rrggbb`, `#rrggbbaa`, `rgb:RRRR/GGGG/BBBB`, and
//! `rgb(r, g, b)` forms. Tiers are the numeric names 50 through 950.
//! `suggest` defaults to the AA level; `shade` and `ladder` swap every
//! tier for its mirrored counterpart when `--dark` is given.
//!
//! Exit codes:
//! - 0: success
//! - 2: bad usage, unparseable input, or no qualifying candidate
//!
//! # Environment Variables
//!
//! - `DEBUG`: when set, prints intermediate values to stderr.

use std::env;
use std::process;

use anyhow::{Context, Result, anyhow};
use legible::{
    ColorLevel, ContrastLevel, Scheme, apply_level, best_contrast, contrast_report, parse_color,
};

const USAGE: &str = "usage:
  legible check <background> <foreground> [--enforce <aa-large|aa|aaa>]
  legible suggest <background> [--level <aa-large|aa|aaa>] [--max-ratio <ratio>]
  legible shade <background> <tier> [--dark]
  legible ladder <background> [--dark]";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => process::exit(code),
        Err(error) => {
            eprintln!("legible: {error:#}");
            process::exit(2);
        }
    }
}

/// Dispatch to a subcommand and return the process exit code.
fn run(args: &[String]) -> Result<i32> {
    let Some((command, rest)) = args.split_first() else {
        return Err(anyhow!("missing command\n{USAGE}"));
    };

    match command.as_str() {
        "check" => check(rest),
        "suggest" => suggest(rest),
        "shade" => shade(rest),
        "ladder" => ladder(rest),
        other => Err(anyhow!("unknown command: {other}\n{USAGE}")),
    }
}

/// Print the contrast report between a background and a foreground.
fn check(args: &[String]) -> Result<i32> {
    let mut positional = Vec::new();
    let mut enforce = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--enforce" {
            let value = iter.next().ok_or_else(|| anyhow!("--enforce needs a value"))?;
            enforce = Some(parse_level(value)?);
        } else {
            positional.push(arg.as_str());
        }
    }

    let &[background, foreground] = positional.as_slice() else {
        return Err(anyhow!("check needs a background and a foreground\n{USAGE}"));
    };

    let bg = parse_color(background).context("Failed to parse background color")?;
    let fg = parse_color(foreground).context("Failed to parse foreground color")?;
    legible::debug!("bg={bg:?} fg={fg:?}");

    println!("{}", contrast_report(bg, fg, enforce));
    Ok(0)
}

/// Print the best qualifying contrast color for a background.
fn suggest(args: &[String]) -> Result<i32> {
    let mut positional = Vec::new();
    let mut level = ContrastLevel::Aa;
    let mut max_ratio = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--level" {
            let value = iter.next().ok_or_else(|| anyhow!("--level needs a value"))?;
            level = parse_level(value)?;
        } else if arg == "--max-ratio" {
            let value = iter.next().ok_or_else(|| anyhow!("--max-ratio needs a value"))?;
            let cap = value
                .parse::<f64>()
                .with_context(|| format!("Invalid max ratio: {value}"))?;
            max_ratio = Some(cap);
        } else {
            positional.push(arg.as_str());
        }
    }

    let &[background] = positional.as_slice() else {
        return Err(anyhow!("suggest needs a background color\n{USAGE}"));
    };

    let bg = parse_color(background).context("Failed to parse background color")?;
    legible::debug!("bg={bg:?} level={level} max_ratio={max_ratio:?}");

    match best_contrast(bg, level, max_ratio) {
        Some(candidate) => {
            println!("{}", candidate.to_hex());
            Ok(0)
        }
        None => {
            // Nothing fit the requested range; report the absence
            // instead of inventing a candidate.
            println!("none");
            Ok(2)
        }
    }
}

/// Print one tier of a background's shade ladder.
fn shade(args: &[String]) -> Result<i32> {
    let (positional, scheme) = split_dark_flag(args);

    let &[background, tier_name] = positional.as_slice() else {
        return Err(anyhow!("shade needs a background color and a tier\n{USAGE}"));
    };

    let bg = parse_color(background).context("Failed to parse background color")?;
    let tier = ColorLevel::from_name(tier_name)
        .ok_or_else(|| anyhow!("unknown tier: {tier_name} (expected 50 through 950)"))?;

    println!("{}", apply_level(bg, tier, scheme).to_hex());
    Ok(0)
}

/// Print all eleven tiers of a background's shade ladder.
fn ladder(args: &[String]) -> Result<i32> {
    let (positional, scheme) = split_dark_flag(args);

    let &[background] = positional.as_slice() else {
        return Err(anyhow!("ladder needs a background color\n{USAGE}"));
    };

    let bg = parse_color(background).context("Failed to parse background color")?;
    for tier in ColorLevel::ALL {
        println!("{tier:>3} {}", apply_level(bg, tier, scheme).to_hex());
    }
    Ok(0)
}

/// Separate the `--dark` flag from positional arguments.
fn split_dark_flag(args: &[String]) -> (Vec<&str>, Scheme) {
    let mut positional = Vec::new();
    let mut scheme = Scheme::Light;

    for arg in args {
        if arg == "--dark" {
            scheme = Scheme::Dark;
        } else {
            positional.push(arg.as_str());
        }
    }

    (positional, scheme)
}

/// Parse a contrast level name from the command line.
fn parse_level(value: &str) -> Result<ContrastLevel> {
    match value {
        "aa-large" => Ok(ContrastLevel::AaLarge),
        "aa" => Ok(ContrastLevel::Aa),
        "aaa" => Ok(ContrastLevel::Aaa),
        other => Err(anyhow!(
            "unknown contrast level: {other} (expected aa-large, aa, or aaa)"
        )),
    }
}
