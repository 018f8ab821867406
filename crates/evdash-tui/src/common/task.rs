//! Background task lifecycle.
//!
//! The runtime reports `TaskStarted`/`TaskCompleted`; only the reducer touches
//! `TaskState`, and a completion is accepted only for the active id.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    ImportParse,
    ImportSave,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskMeta {
    #[default]
    None,
    Import {
        file_name: String,
    },
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub meta: TaskMeta,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub meta: TaskMeta,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.meta = started.meta.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.meta = TaskMeta::None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub import_parse: TaskState,
    pub import_save: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::ImportParse => &self.import_parse,
            TaskKind::ImportSave => &self.import_save,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::ImportParse => &mut self.import_parse,
            TaskKind::ImportSave => &mut self.import_save,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.import_parse.is_running() || self.import_save.is_running()
    }

    /// Metadata of the first running task, for the status line.
    pub fn running_meta(&self) -> Option<(TaskKind, &TaskMeta)> {
        [TaskKind::ImportParse, TaskKind::ImportSave]
            .into_iter()
            .find(|kind| self.state(*kind).is_running())
            .map(|kind| (kind, &self.state(kind).meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut seq = TaskSeq::default();
        let first = seq.next_id();
        let second = seq.next_id();

        let mut state = TaskState::default();
        state.on_started(&TaskStarted {
            id: second,
            meta: TaskMeta::None,
        });

        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
    }

    #[test]
    fn test_running_meta_reports_active_kind() {
        let mut tasks = Tasks::default();
        assert!(tasks.running_meta().is_none());

        tasks.state_mut(TaskKind::ImportSave).on_started(&TaskStarted {
            id: TaskId(7),
            meta: TaskMeta::Import {
                file_name: "events.csv".to_string(),
            },
        });
        let (kind, meta) = tasks.running_meta().unwrap();
        assert_eq!(kind, TaskKind::ImportSave);
        assert!(matches!(meta, TaskMeta::Import { file_name } if file_name == "events.csv"));
        assert!(tasks.is_any_running());
    }
}
