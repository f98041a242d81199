use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::{env, fs, process};

use mdzoom::core::{Command, WheelDirection};
use mdzoom::kernel::services::adapters::{load_settings, FileProbe};
use mdzoom::kernel::services::ports::NaturalWidthProbe;
use mdzoom::kernel::{Action, Effect, ElementId, ImageElement, ImageRef, PaneState, ZoomState};

fn main() -> io::Result<()> {
    let _logging = mdzoom::logging::init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("step") => cmd_step(&args[2..]),
        Some("wheel") => cmd_wheel(&args[2..]),
        _ => {
            usage();
            process::exit(2)
        }
    }
}

fn usage() {
    eprintln!("usage: mdzoom step <file> <line> grow|shrink");
    eprintln!("       mdzoom wheel <file> <image-src> in|out");
}

/// Apply one keyboard-step resize to the given 1-based line of a file.
fn cmd_step(args: &[String]) -> io::Result<()> {
    let [file, line, direction] = args else {
        usage();
        process::exit(2)
    };
    let Ok(line) = line.parse::<usize>() else {
        usage();
        process::exit(2)
    };
    let Some(command) = Command::from_name(direction) else {
        usage();
        process::exit(2)
    };

    let path = Path::new(file);
    let content = fs::read_to_string(path)?;

    let mut state = ZoomState::new(load_settings().unwrap_or_default());
    let mut pane = PaneState::markdown(Some(path.to_path_buf()), &content);
    pane.buffer.set_cursor(line.saturating_sub(1), 0);
    let pane_index = state.workspace.open_pane(pane);

    let (changed, effects) = state.dispatch_action(Action::RunCommand {
        pane: pane_index,
        command,
    });
    tracing::info!(file = %file, line, command = command.name(), changed, "step applied");
    run_effects(&state, &effects)
}

/// Apply one wheel tick for an image reference embedded in a file.
fn cmd_wheel(args: &[String]) -> io::Result<()> {
    let [file, src, direction] = args else {
        usage();
        process::exit(2)
    };
    let direction = match direction.as_str() {
        "in" => WheelDirection::In,
        "out" => WheelDirection::Out,
        _ => {
            usage();
            process::exit(2)
        }
    };

    let path = Path::new(file);
    let content = fs::read_to_string(path)?;

    let mut state = ZoomState::new(load_settings().unwrap_or_default());
    let mut element = ImageElement::new(ElementId::new(1), src.clone());

    // The host normally has the rendered element's natural width on hand;
    // here the probe stands in for it, bounded so a bad file cannot hang the
    // invocation.
    if let Ok(image_ref) = ImageRef::resolve(&element) {
        if let Some(name) = image_ref.attachment_name() {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            element.natural_width = FileProbe::default().natural_width(&dir.join(name));
        }
    }

    let mut pane = PaneState::markdown(Some(path.to_path_buf()), &content);
    pane.render_element(element.id);
    let pane_index = state.workspace.open_pane(pane);

    let modifier_key = state.settings.modifier_key;
    let modifiers = modifier_key.as_modifiers();
    state.dispatch_action(Action::KeyDown(modifier_key.as_key()));
    let (changed, effects) = state.dispatch_action(Action::Wheel {
        element,
        modifiers,
        direction,
    });
    tracing::info!(file = %file, src = %src, ?direction, changed, "wheel applied");
    run_effects(&state, &effects)
}

fn run_effects(state: &ZoomState, effects: &[Effect]) -> io::Result<()> {
    for effect in effects {
        match effect {
            Effect::WriteDocument { pane, path } => {
                let mut writer = BufWriter::new(File::create(path)?);
                state.workspace.panes[*pane].buffer.write_to(&mut writer)?;
            }
            Effect::PersistSettings(settings) => {
                mdzoom::kernel::services::adapters::save_settings(settings)?;
            }
        }
    }
    Ok(())
}
