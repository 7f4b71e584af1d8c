use crate::data::ProjectRecord;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

/// Loading phase of the page. `Ready` is terminal; nothing transitions back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadState {
    Loading,
    Ready,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    FinishLoading,
    ToggleTheme,
    SelectProject(&'static ProjectRecord),
    CloseProjectDetail,
}

/// The page's entire mutable state. Owned by the view component and handed
/// to child render code; nothing outside the view touches it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PortfolioState {
    pub load: LoadState,
    pub theme: Theme,
    pub selected_project: Option<&'static ProjectRecord>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioState {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            theme: Theme::Light,
            selected_project: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Every action is total: no input can fail, and applying an action that
    /// is already satisfied leaves the state unchanged.
    pub fn apply(&self, action: Action) -> Self {
        let mut next = *self;

        match action {
            Action::FinishLoading => next.load = LoadState::Ready,
            Action::ToggleTheme => next.theme = next.theme.toggled(),
            Action::SelectProject(project) => next.selected_project = Some(project),
            Action::CloseProjectDetail => next.selected_project = None,
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PROJECTS;

    #[test]
    fn theme_toggle_is_an_involution() {
        for toggle_count in 0..8 {
            let mut state = PortfolioState::new();
            for _ in 0..toggle_count {
                state = state.apply(Action::ToggleTheme);
            }

            let expected = if toggle_count % 2 == 1 {
                Theme::Dark
            } else {
                Theme::Light
            };
            assert_eq!(state.theme, expected, "after {toggle_count} toggles");
        }
    }

    #[test]
    fn loading_transitions_once_and_never_reverts() {
        let state = PortfolioState::new();
        assert!(state.is_loading());

        let ready = state.apply(Action::FinishLoading);
        assert_eq!(ready.load, LoadState::Ready);

        // A stray second fire is a no-op.
        let still_ready = ready.apply(Action::FinishLoading);
        assert_eq!(still_ready, ready);

        // No other action touches the load phase.
        let toggled = ready.apply(Action::ToggleTheme);
        assert_eq!(toggled.load, LoadState::Ready);
    }

    #[test]
    fn select_then_read_round_trips() {
        for project in PROJECTS {
            let state = PortfolioState::new().apply(Action::SelectProject(project));
            assert_eq!(state.selected_project, Some(project));

            let closed = state.apply(Action::CloseProjectDetail);
            assert_eq!(closed.selected_project, None);
        }
    }

    #[test]
    fn close_when_nothing_selected_is_a_no_op() {
        let state = PortfolioState::new();
        assert_eq!(state.selected_project, None);

        let closed = state.apply(Action::CloseProjectDetail);
        assert_eq!(closed, state);
    }

    #[test]
    fn selecting_another_project_replaces_directly() {
        let first = &PROJECTS[0];
        let second = &PROJECTS[1];

        let state = PortfolioState::new()
            .apply(Action::SelectProject(first))
            .apply(Action::SelectProject(second));

        assert_eq!(state.selected_project, Some(second));
    }

    #[test]
    fn selection_does_not_disturb_other_fields() {
        let state = PortfolioState::new()
            .apply(Action::FinishLoading)
            .apply(Action::ToggleTheme)
            .apply(Action::SelectProject(&PROJECTS[2]));

        assert_eq!(state.load, LoadState::Ready);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn full_browse_flow_over_published_projects() {
        let mut state = PortfolioState::new();
        assert!(state.is_loading());

        state = state.apply(Action::FinishLoading);
        assert!(!state.is_loading());

        assert_eq!(PROJECTS.len(), 4);

        for project in PROJECTS {
            state = state.apply(Action::SelectProject(project));
            let open = state.selected_project.expect("detail view should be open");
            assert_eq!(open.title, project.title);
            assert_eq!(open.details, project.details);
            assert_eq!(open.tech_stack, project.tech_stack);

            state = state.apply(Action::CloseProjectDetail);
            assert_eq!(state.selected_project, None);
        }
    }
}
