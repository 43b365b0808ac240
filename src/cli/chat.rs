use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::controller::ChatController;
use crate::core::AppConfig;
use crate::schema::{TURBO_MODEL_KEY, find_model, is_turbo_capable};
use crate::store::SharedStore;
use crate::view::intent::HELP;
use crate::view::render;
use crate::view::{Intent, KeyAction, can_submit, key_action, parse_intent, resolve_history_target};

/// What the REPL should do after handling one intent
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Print(String),
    Nothing,
    Quit,
}

fn last_message(store: &SharedStore) -> String {
    store
        .read()
        .expect("Unable to read chat store")
        .messages()
        .last()
        .map(render::render_message)
        .unwrap_or_default()
}

/// Carry out one user intent against the controller and store
pub async fn dispatch(controller: &ChatController, intent: Intent) -> Outcome {
    let store = controller.store();

    match intent {
        Intent::Send(text) => {
            if !can_submit(&text, controller.is_busy()) {
                return Outcome::Nothing;
            }
            match controller.send_message(&text).await {
                Ok(_) => Outcome::Print(last_message(&store)),
                Err(e) => Outcome::Print(format!(
                    "{}\n{}",
                    last_message(&store),
                    e.to_string().red()
                )),
            }
        }
        Intent::SelectModel(key) => {
            let mut store = store.write().expect("Unable to write chat store");
            match store.set_selected_model(&key) {
                Ok(()) => Outcome::Print(render::render_header(&store)),
                Err(e) => Outcome::Print(format!("{}, try /models", e).red().to_string()),
            }
        }
        Intent::ToggleTurbo => {
            let mut store = store.write().expect("Unable to write chat store");
            if !is_turbo_capable(store.selected_model_key()) {
                let label = find_model(TURBO_MODEL_KEY).map(|m| m.label).unwrap_or(TURBO_MODEL_KEY);
                return Outcome::Print(
                    format!("Turbo mode is only available for {}", label)
                        .yellow()
                        .to_string(),
                );
            }
            store.toggle_turbo();
            Outcome::Print(render::render_header(&store))
        }
        Intent::ShowHistory => match controller.refresh_history().await {
            Ok(()) => Outcome::Print(render::render_history(
                &store.read().expect("Unable to read chat store"),
            )),
            Err(e) => Outcome::Print(format!("Could not load history: {}", e).red().to_string()),
        },
        Intent::LoadConversation(target) => {
            let id = {
                let store = store.read().expect("Unable to read chat store");
                resolve_history_target(store.history(), &target).unwrap_or(target)
            };
            match controller.load_conversation(&id).await {
                Ok(()) => {
                    let store = store.read().expect("Unable to read chat store");
                    Outcome::Print(format!(
                        "{}\n\n{}",
                        render::render_header(&store),
                        render::render_messages(&store)
                    ))
                }
                Err(e) => Outcome::Print(
                    format!("Could not load conversation {}: {}", id, e)
                        .red()
                        .to_string(),
                ),
            }
        }
        Intent::NewConversation => {
            controller.new_conversation().await;
            Outcome::Print(String::from("Started a new conversation"))
        }
        Intent::ListModels => Outcome::Print(render::render_models(
            store
                .read()
                .expect("Unable to read chat store")
                .selected_model_key(),
        )),
        Intent::Help => Outcome::Print(HELP.to_string()),
        Intent::Quit => Outcome::Quit,
        Intent::Unknown(command) => Outcome::Print(format!("Unknown command {}, try /help", command)),
    }
}

/// Fold one line of input into the draft held in the store. Returns
/// the full draft once the user submits it.
fn take_draft(store: &SharedStore, line: &str) -> Option<String> {
    let (text, shift) = match line.strip_suffix('\\') {
        Some(rest) => (rest, true),
        None => (line, false),
    };

    let mut store = store.write().expect("Unable to write chat store");
    let mut draft = store.input_value().to_string();
    if !draft.is_empty() {
        draft.push('\n');
    }
    draft.push_str(text);

    match key_action(shift) {
        KeyAction::InsertNewline => {
            store.set_input_value(&draft);
            None
        }
        KeyAction::Submit => {
            store.set_input_value("");
            Some(draft)
        }
    }
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let store = super::open_store(config)?;
    let client = ApiClient::new(&config.api_base_url);
    let controller = ChatController::new(Arc::new(client), store.clone());

    {
        let store = store.read().expect("Unable to read chat store");
        println!("{}", render::render_header(&store));
        if !store.messages().is_empty() {
            println!("\n{}\n", render::render_messages(&store));
        }
    }
    if let Err(e) = controller.refresh_history().await {
        eprintln!("{}", format!("Could not load history: {}", e).red());
    }
    println!("{}", "Type /help for commands".bright_black());

    loop {
        let turbo = store
            .read()
            .expect("Unable to read chat store")
            .effective_turbo();
        let readline = rl.readline(&render::prompt(turbo));
        match readline {
            Ok(line) => {
                let Some(draft) = take_draft(&store, &line) else {
                    continue;
                };
                let _ = rl.add_history_entry(draft.as_str());

                match dispatch(&controller, parse_intent(&draft)).await {
                    Outcome::Print(output) => println!("{}\n", output),
                    Outcome::Nothing => {}
                    Outcome::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
