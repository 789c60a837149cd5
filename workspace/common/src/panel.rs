/// The two pages of the dashboard. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Modeler,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Dashboard, Panel::Modeler];
    pub const ACTIVE_CLASS: &'static str = "active";

    pub fn page_id(&self) -> &'static str {
        match self {
            Panel::Dashboard => "page-dashboard",
            Panel::Modeler => "page-modeler",
        }
    }

    pub fn button_id(&self) -> &'static str {
        match self {
            Panel::Dashboard => "btn-dashboard",
            Panel::Modeler => "btn-modeler",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Global Dashboard",
            Panel::Modeler => "Fraud Modeler",
        }
    }

    /// `active` when `self` is the selected panel.
    pub fn active_class(&self, selected: Panel) -> Option<&'static str> {
        (*self == selected).then_some(Self::ACTIVE_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_is_initial() {
        let selected = Panel::default();
        assert_eq!(Panel::Dashboard.active_class(selected), Some("active"));
        assert_eq!(Panel::Modeler.active_class(selected), None);
    }

    #[test]
    fn test_exactly_one_panel_active() {
        for selected in Panel::ALL {
            let active: Vec<_> = Panel::ALL
                .iter()
                .filter(|panel| panel.active_class(selected).is_some())
                .collect();
            assert_eq!(active, vec![&selected]);
        }
    }

    #[test]
    fn test_modeler_selection() {
        let selected = Panel::Modeler;
        assert_eq!(Panel::Modeler.active_class(selected), Some("active"));
        assert_eq!(Panel::Dashboard.active_class(selected), None);
        assert_eq!(Panel::Modeler.page_id(), "page-modeler");
        assert_eq!(Panel::Modeler.button_id(), "btn-modeler");
    }
}
