use crate::i18n::Text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Shop,
    Games,
    Profile,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Shop, View::Games, View::Profile];

    pub fn label(self) -> Text {
        match self {
            View::Home => Text::NavHome,
            View::Shop => Text::NavShop,
            View::Games => Text::NavGames,
            View::Profile => Text::NavProfile,
        }
    }

    pub fn requires_member(self) -> bool {
        match self {
            View::Home | View::Shop => false,
            View::Games | View::Profile => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Shown(View),
    /// The view is members-only; the caller should open sign-up.
    NeedsSignIn(View),
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
    history: Vec<View>,
    /// Members-only view a guest asked for, shown once they sign in.
    pending: Option<View>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn navigate(&mut self, view: View, signed_in: bool) -> NavOutcome {
        if view.requires_member() && !signed_in {
            log::debug!("{:?} needs a member, prompting sign-in", view);
            self.pending = Some(view);
            return NavOutcome::NeedsSignIn(view);
        }
        self.pending = None;
        if view != self.current {
            self.history.push(self.current);
            self.current = view;
        }
        NavOutcome::Shown(view)
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn back(&mut self) -> View {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
        self.current
    }

    /// Shows the view a guest was bounced from, once they are a member.
    pub fn resume_pending(&mut self, signed_in: bool) -> Option<View> {
        if !signed_in {
            return None;
        }
        let view = self.pending.take()?;
        self.navigate(view, true);
        Some(view)
    }

    pub fn cancel_pending(&mut self) {
        if let Some(view) = self.pending.take() {
            log::debug!("Sign-in abandoned, forgetting {:?}", view);
        }
    }

    /// Leaves members-only views, e.g. after sign-out.
    pub fn drop_member_views(&mut self) {
        self.pending = None;
        self.history.retain(|v| !v.requires_member());
        if self.current.requires_member() {
            self.current = self.history.pop().unwrap_or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guests_are_sent_to_sign_in() {
        let mut nav = Navigator::new();
        assert_eq!(nav.navigate(View::Profile, false), NavOutcome::NeedsSignIn(View::Profile));
        assert_eq!(nav.current(), View::Home);
        assert_eq!(nav.navigate(View::Shop, false), NavOutcome::Shown(View::Shop));
    }

    #[test]
    fn back_walks_history() {
        let mut nav = Navigator::new();
        nav.navigate(View::Shop, true);
        nav.navigate(View::Games, true);
        nav.navigate(View::Games, true);
        assert_eq!(nav.back(), View::Shop);
        assert_eq!(nav.back(), View::Home);
        assert!(!nav.can_go_back());
        assert_eq!(nav.back(), View::Home);
    }

    #[test]
    fn sign_out_leaves_member_views() {
        let mut nav = Navigator::new();
        nav.navigate(View::Shop, true);
        nav.navigate(View::Profile, true);
        nav.drop_member_views();
        assert_eq!(nav.current(), View::Shop);
        assert_eq!(nav.back(), View::Home);
    }

    #[test]
    fn bounced_guest_lands_on_requested_view_after_sign_in() {
        let mut nav = Navigator::new();
        nav.navigate(View::Games, false);

        assert_eq!(nav.resume_pending(false), None);
        assert_eq!(nav.current(), View::Home);

        assert_eq!(nav.resume_pending(true), Some(View::Games));
        assert_eq!(nav.current(), View::Games);
        assert_eq!(nav.resume_pending(true), None);
        assert_eq!(nav.back(), View::Home);
    }

    #[test]
    fn abandoned_sign_in_forgets_requested_view() {
        let mut nav = Navigator::new();
        nav.navigate(View::Profile, false);
        nav.cancel_pending();
        assert_eq!(nav.resume_pending(true), None);
        assert_eq!(nav.current(), View::Home);

        nav.navigate(View::Profile, false);
        nav.navigate(View::Shop, false);
        assert_eq!(nav.resume_pending(true), None);
        assert_eq!(nav.current(), View::Shop);
    }
}
