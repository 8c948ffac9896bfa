//! Bookkeeping of mounted component instances and their last arguments

use std::collections::HashMap;

use crate::error::{Result, TilgError};
use crate::markup::{Arg, Hints};

/// Opaque id of one mounted component instance
pub type Mark = u64;

#[derive(Debug)]
struct Instance {
    component: String,
    /// Arguments seen on the previous render
    args: Option<Vec<Arg>>,
}

/// Instance table owned by a logger
///
/// Marks are handed out on mount and released on unmount. Each component
/// name keeps an ordered list of its live marks so repeated instances can be
/// told apart.
#[derive(Debug, Default)]
pub struct Registry {
    next_mark: Mark,
    instances: HashMap<Mark, Instance>,
    slots: HashMap<String, Vec<Mark>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new instance of `component`
    pub fn mount(&mut self, component: &str) -> Mark {
        self.next_mark += 1;
        let mark = self.next_mark;

        self.instances.insert(
            mark,
            Instance {
                component: component.to_string(),
                args: None,
            },
        );
        self.slots
            .entry(component.to_string())
            .or_default()
            .push(mark);

        log::debug!("Mounted {} as mark {}", component, mark);
        mark
    }

    pub fn component(&self, mark: Mark) -> Result<&str> {
        self.instances
            .get(&mark)
            .map(|instance| instance.component.as_str())
            .ok_or(TilgError::UnknownMark(mark))
    }

    /// Position of `mark` among the live instances of its component
    pub fn instance_index(&self, mark: Mark) -> Result<usize> {
        let component = self.component(mark)?;
        self.slots
            .get(component)
            .and_then(|marks| marks.iter().position(|m| *m == mark))
            .ok_or(TilgError::UnknownMark(mark))
    }

    /// Record `args` for `mark` and report what changed
    ///
    /// Returns `None` when every argument is the same as last time. The
    /// first call, or a change in argument count, yields empty hints.
    pub fn track(&mut self, mark: Mark, args: &[Arg]) -> Result<Option<Hints>> {
        let instance = self
            .instances
            .get_mut(&mark)
            .ok_or(TilgError::UnknownMark(mark))?;

        let hints = match &instance.args {
            Some(prev) if prev.len() == args.len() => {
                let changed: Hints = prev
                    .iter()
                    .zip(args)
                    .enumerate()
                    .filter(|(_, (before, now))| !before.same(now))
                    .map(|(i, _)| i)
                    .collect();
                if changed.is_empty() {
                    None
                } else {
                    Some(changed)
                }
            }
            _ => Some(Hints::new()),
        };

        instance.args = Some(args.to_vec());
        Ok(hints)
    }

    /// Forget `mark`, returning its component name
    pub fn unmount(&mut self, mark: Mark) -> Result<String> {
        let instance = self
            .instances
            .remove(&mark)
            .ok_or(TilgError::UnknownMark(mark))?;

        if let Some(marks) = self.slots.get_mut(&instance.component) {
            if let Some(index) = marks.iter().position(|m| *m == mark) {
                marks.swap_remove(index);
            }
            if marks.is_empty() {
                self.slots.remove(&instance.component);
            }
        }

        log::debug!("Unmounted {} (mark {})", instance.component, mark);
        Ok(instance.component)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
