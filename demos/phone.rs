//! Walks a phone number through the mask engine, the way a text
//! widget would feed it: one keystroke at a time.

use log::debug;
use std::fs;
use std::sync::Arc;
use text_mask::{AffinityStrategy, MaskRegistry, MaskedField};

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let registry = Arc::new(MaskRegistry::new());

    let field = MaskedField::new(registry.clone(), "+7 ([000]) [000]-[00]-[00]")
        .affine_formats(["8 ([000]) [000]-[00]-[00]"])
        .strategy(AffinityStrategy::Prefix)
        .autocomplete(true)
        .autoskip(true);

    println!("placeholder: {}", field.placeholder()?);

    // type it in, char by char; the "+7 (" prefix fills in by itself
    let mut text = String::new();
    let mut caret = 0;
    for key in "9991234567".chars() {
        text.insert(
            text.char_indices().nth(caret).map(|(i, _)| i).unwrap_or(text.len()),
            key,
        );
        let result = field.text_changed(&text, caret, 0, 1)?;
        debug!("{:?} -> {:?}", text, result);
        println!(
            "{:12}  ->  {:24} value={:?} complete={}",
            text, result.formatted_text.string, result.extracted_value, result.complete,
        );
        text = result.formatted_text.string;
        caret = result.formatted_text.caret;
    }

    // backspacing: the second one also swallows the separator that
    // would otherwise dangle
    for _ in 0..2 {
        if let Some((i, _)) = text.char_indices().nth(caret - 1) {
            text.remove(i);
            caret -= 1;
        }
        let result = field.text_changed(&text, caret, 1, 0)?;
        println!(
            "backspace     ->  {:24} value={:?}",
            result.formatted_text.string, result.extracted_value,
        );
        text = result.formatted_text.string;
        caret = result.formatted_text.caret;
    }

    Ok(())
}

fn setup_logging() -> Result<(), anyhow::Error> {
    _ = fs::remove_file("log.log");
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("log.log")?)
        .apply()?;
    Ok(())
}
