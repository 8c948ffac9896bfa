use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tilg::config;
use tilg::display::{Sink, TerminalSink};
use tilg::error::{Result, TilgError};
use tilg::lifecycle::{Frame, Logger, Mark};
use tilg::Arg;

use crate::cli::template::split_template;

/// One step of a replay script
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum Event {
    Mount {
        id: String,
        component: String,
    },
    Render {
        id: String,
        #[serde(default)]
        props: Value,
    },
    Args {
        id: String,
        template: String,
        #[serde(default)]
        values: Vec<Value>,
        #[serde(default)]
        frames: Vec<Frame>,
    },
    Inline {
        id: String,
        values: Vec<Value>,
        #[serde(default)]
        frames: Vec<Frame>,
    },
    Unmount {
        id: String,
    },
}

/// Script state: live marks and the last values passed per script id
///
/// JSON cannot express references, so an object equal to the one passed at
/// the same position last time is handed over as the same reference.
struct Session<S: Sink> {
    logger: Logger<S>,
    marks: HashMap<String, Mark>,
    last_values: HashMap<String, Vec<Arg>>,
}

impl<S: Sink> Session<S> {
    fn new(logger: Logger<S>) -> Self {
        Self {
            logger,
            marks: HashMap::new(),
            last_values: HashMap::new(),
        }
    }

    fn mark(&self, id: &str) -> Result<Mark> {
        self.marks
            .get(id)
            .copied()
            .ok_or_else(|| TilgError::Script(format!("'{}' is not mounted", id)))
    }

    fn intern(&mut self, id: &str, values: Vec<Value>) -> Vec<Arg> {
        let previous = self.last_values.get(id);
        let args: Vec<Arg> = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| match previous.and_then(|prev| prev.get(i)) {
                Some(Arg::Object(prev)) if **prev == value => Arg::Object(prev.clone()),
                _ => Arg::from(value),
            })
            .collect();
        self.last_values.insert(id.to_string(), args.clone());
        args
    }

    fn apply(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Mount { id, component } => {
                if self.marks.contains_key(&id) {
                    return Err(TilgError::Script(format!("'{}' is already mounted", id)));
                }
                let mark = self.logger.mounted(&component)?;
                self.marks.insert(id, mark);
            }
            Event::Render { id, props } => {
                let mark = self.mark(&id)?;
                self.logger.rendered(mark, &Arg::from(props))?;
            }
            Event::Args {
                id,
                template,
                values,
                frames,
            } => {
                let mark = self.mark(&id)?;
                let args = self.intern(&id, values);
                let segments = split_template(&template);
                self.logger.args(mark, &segments, &args, &frames)?;
            }
            Event::Inline { id, values, frames } => {
                let mark = self.mark(&id)?;
                let args = self.intern(&id, values);
                self.logger.inline(mark, &args, &frames)?;
            }
            Event::Unmount { id } => {
                let mark = self.mark(&id)?;
                self.logger.unmounted(mark)?;
                self.marks.remove(&id);
                self.last_values.remove(&id);
            }
        }
        Ok(())
    }
}

/// Read a replay script
pub fn load_script(path: &Path) -> Result<Vec<Event>> {
    let content = fs::read_to_string(path).map_err(|e| {
        TilgError::Script(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    let events: Vec<Event> = serde_json::from_str(&content)?;
    Ok(events)
}

/// Feed every event of `events` through `logger`
pub fn replay<S: Sink>(logger: Logger<S>, events: Vec<Event>) -> Result<Logger<S>> {
    let mut session = Session::new(logger);
    for (index, event) in events.into_iter().enumerate() {
        log::debug!("Replaying event {}: {:?}", index, event);
        session.apply(event).map_err(|e| match e {
            TilgError::Script(msg) => TilgError::Script(format!("event {}: {}", index, msg)),
            other => other,
        })?;
    }
    Ok(session.logger)
}

/// Replay a lifecycle script to the terminal
pub fn run(script: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_or_default(config_path.as_deref())?;
    let events = load_script(&script)?;

    let logger = Logger::from_config(&config, TerminalSink::new(config.output.color));
    replay(logger, events)?;

    Ok(())
}
