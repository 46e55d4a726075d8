use egui::Color32;

/// Colors and sizes the host application can restyle. Passed explicitly in
/// the locator configuration; there is no shared theming context.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// List text for dealers inside the current viewport.
    pub emphasized_text_color: Color32,
    /// List text for dealers off the map.
    pub muted_text_color: Color32,
    /// Width of the search + list side panel.
    pub list_panel_width: f32,
    /// Marker size for unselected dealers.
    pub pin_size: f32,
    /// Marker size for the selected (or hovered) dealer.
    pub selected_pin_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            emphasized_text_color: Color32::WHITE,
            muted_text_color: Color32::GRAY,
            list_panel_width: 322.0,
            pin_size: 20.0,
            selected_pin_size: 30.0,
        }
    }
}

impl Theme {
    /// The "reserve" palette of the original web widget, for hosts with
    /// light chrome.
    pub fn reserve() -> Self {
        Self {
            emphasized_text_color: Color32::from_rgb(0x4d, 0x4d, 0x4d),
            muted_text_color: Color32::GRAY,
            ..Self::default()
        }
    }
}
