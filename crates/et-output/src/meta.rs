//! Display metadata per transport mode.

use et_core::TransportMode;

/// How a mode is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeMeta {
    /// pt-BR label.
    pub label: &'static str,
    pub icon:  &'static str,
    /// CSS hex colour.
    pub color: &'static str,
}

const BICYCLE: ModeMeta = ModeMeta { label: "Bicicleta", icon: "🚲", color: "#10b981" };
const CAR:     ModeMeta = ModeMeta { label: "Carro",     icon: "🚗", color: "#3b82f6" };
const BUS:     ModeMeta = ModeMeta { label: "Ônibus",    icon: "🚌", color: "#f59e0b" };
const TRUCK:   ModeMeta = ModeMeta { label: "Caminhão",  icon: "🚛", color: "#ef4444" };

impl ModeMeta {
    pub fn of(mode: TransportMode) -> &'static ModeMeta {
        match mode {
            TransportMode::Bicycle => &BICYCLE,
            TransportMode::Car     => &CAR,
            TransportMode::Bus     => &BUS,
            TransportMode::Truck   => &TRUCK,
        }
    }
}
