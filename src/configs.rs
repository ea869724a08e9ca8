use crate::winit::WindowAttributes;

#[derive(Debug)]
pub struct AppConfigs {
    pub window_attributes: WindowAttributes,
    pub updates_per_second: u32,
}

impl Default for AppConfigs {
    #[inline]
    fn default() -> Self {
        Self {
            window_attributes: WindowAttributes::default(),
            updates_per_second: 60,
        }
    }
}

impl AppConfigs {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn window_attributes(self, window_attributes: WindowAttributes) -> Self {
        Self {
            window_attributes,
            ..self
        }
    }

    #[inline]
    pub fn updates_per_second(self, updates_per_second: u32) -> Self {
        Self {
            updates_per_second,
            ..self
        }
    }
}
