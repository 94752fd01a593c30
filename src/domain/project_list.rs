use super::project::Project;

/// Owns the project collection and the active-project reference.
///
/// Every mutation goes through here. Changes that must reach the remote
/// store raise `needs_push`; changes to the active reference raise
/// `active_changed`. The event loop consumes both flags.
///
/// Until a snapshot has been loaded the collection is incomplete, so a
/// restored active reference that matches nothing is kept rather than
/// treated as stale.
#[derive(Debug, Default)]
pub struct ProjectList {
    projects: Vec<Project>,
    active_id: Option<String>,
    needs_push: bool,
    active_changed: bool,
    loaded: bool,
    last_id_millis: i64,
}

impl ProjectList {
    /// Start empty with the active reference restored from local state
    pub fn new(active_id: Option<String>) -> Self {
        Self {
            active_id,
            ..Self::default()
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Raw reference, possibly dangling
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The active project, if the reference points at an incomplete project
    pub fn active_project(&self) -> Option<&Project> {
        let id = self.active_id.as_deref()?;
        self.find(id).filter(|p| !p.completed)
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Incomplete projects first, insertion order kept within each group
    pub fn display_order(&self) -> Vec<&Project> {
        let mut rows: Vec<&Project> = self.projects.iter().collect();
        rows.sort_by_key(|p| p.completed);
        rows
    }

    /// Append a new project. Blank names are ignored.
    pub fn add_project(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.clear_stale_active();

        let id = self.next_id();
        self.projects.push(Project::new(id.clone(), name.to_string()));
        if self.active_id.is_none() {
            self.set_active_unchecked(Some(id.clone()));
        }
        self.needs_push = true;
        Some(id)
    }

    pub fn delete_project(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.projects.remove(index);

        if self.active_id.as_deref() == Some(id) {
            let next = self
                .projects
                .iter()
                .find(|p| !p.completed)
                .map(|p| p.id.clone());
            self.set_active_unchecked(next);
        }
        self.clear_stale_active();
        self.needs_push = true;
        true
    }

    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let project = &mut self.projects[index];
        project.completed = !project.completed;

        // A completed project cannot stay active
        if project.completed && self.active_id.as_deref() == Some(id) {
            self.set_active_unchecked(None);
        }
        self.clear_stale_active();
        self.needs_push = true;
        true
    }

    /// Select the project credited with finished Pomodoros.
    /// Rejected for unknown or completed projects.
    pub fn set_active(&mut self, id: &str) -> bool {
        let selectable = self.find(id).is_some_and(|p| !p.completed);
        if !selectable {
            return false;
        }
        if self.active_id.as_deref() != Some(id) {
            self.set_active_unchecked(Some(id.to_string()));
        }
        true
    }

    pub fn increment_completed_count(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.projects[index].pomodoros_completed += 1;
        self.clear_stale_active();
        self.needs_push = true;
        true
    }

    /// Replace the whole collection with a fetched snapshot.
    /// Drops any push raised before the snapshot arrived.
    pub fn load(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.loaded = true;
        self.needs_push = false;
        self.clear_stale_active();
    }

    /// Consume the pending push request
    pub fn take_push_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_push)
    }

    /// Consume the pending active-reference change
    pub fn take_active_change(&mut self) -> bool {
        std::mem::take(&mut self.active_changed)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    fn set_active_unchecked(&mut self, id: Option<String>) {
        self.active_id = id;
        self.active_changed = true;
    }

    fn clear_stale_active(&mut self) {
        if self.loaded && self.active_id.is_some() && self.active_project().is_none() {
            self.set_active_unchecked(None);
        }
    }

    /// Creation timestamp in milliseconds, bumped until unique
    fn next_id(&mut self) -> String {
        let mut millis = chrono::Utc::now()
            .timestamp_millis()
            .max(self.last_id_millis + 1);
        while self.find(&millis.to_string()).is_some() {
            millis += 1;
        }
        self.last_id_millis = millis;
        millis.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: &str, completed: bool) -> Project {
        Project {
            id: id.to_string(),
            name: id.to_uppercase(),
            pomodoros_completed: 0,
            completed,
        }
    }

    fn ids(rows: &[&Project]) -> Vec<String> {
        rows.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_blank_names_are_ignored() {
        let mut list = ProjectList::default();
        assert_eq!(list.add_project(""), None);
        assert_eq!(list.add_project("   "), None);
        assert!(list.is_empty());
        assert!(!list.take_push_request());
        assert!(!list.take_active_change());
    }

    #[test]
    fn test_add_project() {
        let mut list = ProjectList::default();
        let id = list.add_project("  Write paper ").unwrap();

        assert_eq!(list.projects().len(), 1);
        let added = &list.projects()[0];
        assert_eq!(added.id, id);
        assert_eq!(added.name, "Write paper");
        assert_eq!(added.pomodoros_completed, 0);
        assert!(!added.completed);
        assert!(list.take_push_request());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = ProjectList::default();
        let a = list.add_project("A").unwrap();
        let b = list.add_project("B").unwrap();
        let c = list.add_project("C").unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_first_project_becomes_active() {
        let mut list = ProjectList::default();
        let first = list.add_project("First").unwrap();
        assert_eq!(list.active_id(), Some(first.as_str()));
        assert!(list.take_active_change());

        list.add_project("Second").unwrap();
        assert_eq!(list.active_id(), Some(first.as_str()));
        assert!(!list.take_active_change());
    }

    #[test]
    fn test_add_replaces_stale_active() {
        let mut list = ProjectList::new(Some("gone".to_string()));
        list.load(vec![project("a", false)]);
        assert_eq!(list.active_id(), None);

        list.delete_project("a");
        let id = list.add_project("Fresh").unwrap();
        assert_eq!(list.active_id(), Some(id.as_str()));
    }

    #[test]
    fn test_add_before_load_keeps_restored_active() {
        let mut list = ProjectList::new(Some("1".to_string()));
        list.add_project("Offline").unwrap();
        assert_eq!(list.active_id(), Some("1"));
        assert!(!list.take_active_change());

        list.load(vec![project("1", false)]);
        assert_eq!(list.active_id(), Some("1"));
        assert_eq!(list.active_project().unwrap().id, "1");
    }

    #[test]
    fn test_completed_toggle_before_load_keeps_restored_active() {
        let mut list = ProjectList::new(Some("1".to_string()));
        let id = list.add_project("Offline").unwrap();
        list.toggle_complete(&id);
        list.delete_project(&id);
        assert_eq!(list.active_id(), Some("1"));
    }

    #[test]
    fn test_completing_active_clears_it() {
        let mut list = ProjectList::default();
        let id = list.add_project("Only").unwrap();

        assert!(list.toggle_complete(&id));
        assert_eq!(list.active_id(), None);

        assert!(list.toggle_complete(&id));
        assert!(!list.projects()[0].completed);
        assert_eq!(list.active_id(), None);
    }

    #[test]
    fn test_completing_other_project_keeps_active() {
        let mut list = ProjectList::default();
        let a = list.add_project("A").unwrap();
        let b = list.add_project("B").unwrap();
        list.toggle_complete(&b);
        assert_eq!(list.active_id(), Some(a.as_str()));
    }

    #[test]
    fn test_delete_active_moves_to_first_incomplete() {
        let mut list = ProjectList::new(Some("a".to_string()));
        list.load(vec![project("a", false), project("b", false), project("c", true)]);

        assert!(list.delete_project("a"));
        assert_eq!(list.active_id(), Some("b"));
        assert!(list.take_push_request());
    }

    #[test]
    fn test_delete_active_skips_completed() {
        let mut list = ProjectList::new(Some("b".to_string()));
        list.load(vec![project("a", true), project("b", false), project("c", false)]);

        list.delete_project("b");
        assert_eq!(list.active_id(), Some("c"));
    }

    #[test]
    fn test_delete_last_incomplete_unsets_active() {
        let mut list = ProjectList::new(Some("a".to_string()));
        list.load(vec![project("a", false), project("b", true)]);

        list.delete_project("a");
        assert_eq!(list.active_id(), None);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut list = ProjectList::default();
        list.load(vec![project("a", false)]);
        assert!(!list.delete_project("zzz"));
        assert_eq!(list.projects().len(), 1);
        assert!(!list.take_push_request());
    }

    #[test]
    fn test_set_active() {
        let mut list = ProjectList::default();
        list.load(vec![project("a", false), project("b", true)]);

        assert!(list.set_active("a"));
        assert_eq!(list.active_id(), Some("a"));
        assert!(list.take_active_change());

        assert!(!list.set_active("b"));
        assert!(!list.set_active("missing"));
        assert_eq!(list.active_id(), Some("a"));
        assert!(!list.take_push_request());
    }

    #[test]
    fn test_increment_completed_count() {
        let mut list = ProjectList::default();
        let id = list.add_project("Count me").unwrap();
        list.take_push_request();

        assert!(list.increment_completed_count(&id));
        assert!(list.increment_completed_count(&id));
        assert_eq!(list.projects()[0].pomodoros_completed, 2);
        assert!(list.take_push_request());
    }

    #[test]
    fn test_increment_deleted_project_is_noop() {
        let mut list = ProjectList::default();
        let id = list.add_project("Short lived").unwrap();
        list.delete_project(&id);
        list.take_push_request();

        assert!(!list.increment_completed_count(&id));
        assert!(!list.take_push_request());
    }

    #[test]
    fn test_load_discards_earlier_push_request() {
        let mut list = ProjectList::default();
        list.add_project("Before load");
        list.load(vec![]);
        assert!(!list.take_push_request());
    }

    #[test]
    fn test_load_does_not_request_push() {
        let mut list = ProjectList::default();
        list.load(vec![project("a", false), project("b", false)]);
        assert_eq!(list.projects().len(), 2);
        assert!(!list.take_push_request());
    }

    #[test]
    fn test_load_keeps_valid_active_and_drops_stale() {
        let mut list = ProjectList::new(Some("b".to_string()));
        list.load(vec![project("a", false), project("b", false)]);
        assert_eq!(list.active_id(), Some("b"));
        assert!(!list.take_active_change());

        let mut list = ProjectList::new(Some("b".to_string()));
        list.load(vec![project("a", false), project("b", true)]);
        assert_eq!(list.active_id(), None);
        assert!(list.take_active_change());
    }

    #[test]
    fn test_active_project_ignores_dangling_reference() {
        let list = ProjectList::new(Some("ghost".to_string()));
        assert_eq!(list.active_id(), Some("ghost"));
        assert!(list.active_project().is_none());
    }

    #[test]
    fn test_display_order() {
        let mut list = ProjectList::default();
        list.load(vec![project("a", true), project("b", false), project("c", false)]);
        assert_eq!(ids(&list.display_order()), vec!["b", "c", "a"]);
        // Collection itself keeps insertion order
        assert_eq!(list.projects()[0].id, "a");
    }

    #[test]
    fn test_new_id_skips_loaded_ids() {
        let mut list = ProjectList::default();
        let future = (chrono::Utc::now().timestamp_millis() + 5).to_string();
        list.load(vec![project(&future, false)]);
        for _ in 0..10 {
            let id = list.add_project("x").unwrap();
            assert_ne!(id, future);
        }
    }
}
