//! Refrigerants offered for vapor-compression cycles.

macro_rules! refrigerant {
    ($(#[$doc:meta])* $name:ident => $coolprop:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        #[cfg(feature = "coolprop")]
        impl crate::support::thermo::model::coolprop::CoolPropFluid for $name {
            const BACKEND: &'static str = "HEOS";
            const NAME: &'static str = $coolprop;
        }
    };
}

refrigerant!(
    /// 1,1,1,2-Tetrafluoroethane.
    R134a => "R134a"
);
refrigerant!(
    /// Chlorodifluoromethane.
    R22 => "R22"
);
refrigerant!(
    /// Near-azeotropic R32/R125 blend, treated as a pseudo-pure fluid.
    R410A => "R410A"
);
refrigerant!(
    /// Difluoromethane.
    R32 => "R32"
);
refrigerant!(
    /// Ammonia (R717).
    Ammonia => "Ammonia"
);
refrigerant!(
    /// Propane (R290).
    Propane => "Propane"
);
