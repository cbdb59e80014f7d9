/// Base trait for thermodynamic property models.
///
/// A model is tied to one `Fluid` type, which names the substance and may
/// carry any data needed to make a state well-defined.
pub trait ThermoModel {
    type Fluid;
}
