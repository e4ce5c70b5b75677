//! Coefficient tables of GOST 30319.3-2015 (AGA8-92DC characterisation,
//! ideal-gas heat capacity of ISO 20765-1 Annex B).

use crate::ng_gost::NgComponent;

/// Molecular characteristics of a component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Characteristics {
    /// Molar mass [kg/kmol].
    pub molar_mass: f64,
    /// Energy parameter E [K].
    pub energy: f64,
    /// Size parameter K [(m³/kmol)^(1/3)].
    pub size: f64,
    /// Orientation parameter G.
    pub orientation: f64,
    /// Quadrupole parameter Q.
    pub quadrupole: f64,
    /// High temperature parameter F.
    pub high_temp: f64,
    /// Dipole parameter S.
    pub dipole: f64,
    /// Association parameter W.
    pub association: f64,
}

const fn ch(molar_mass: f64, energy: f64, size: f64, orientation: f64) -> Characteristics {
    Characteristics {
        molar_mass,
        energy,
        size,
        orientation,
        quadrupole: 0.0,
        high_temp: 0.0,
        dipole: 0.0,
        association: 0.0,
    }
}

pub(crate) fn characteristics(c: NgComponent) -> Characteristics {
    use NgComponent::*;
    match c {
        Methane => ch(16.043, 151.3183, 0.4619255, 0.0),
        Ethane => ch(30.07, 244.1667, 0.5279209, 0.0793),
        Propane => ch(44.097, 298.1183, 0.583749, 0.141239),
        IsoButane => ch(58.123, 324.0689, 0.6406937, 0.256692),
        NButane => ch(58.123, 337.6389, 0.6341423, 0.281835),
        IsoPentane => ch(72.15, 365.5999, 0.6738577, 0.332267),
        NPentane => ch(72.15, 370.6823, 0.6798307, 0.366911),
        Hexane => ch(86.177, 402.636293, 0.7175118, 0.289731),
        Heptane => ch(100.204, 427.72263, 0.7525189, 0.337542),
        Octane => ch(114.231, 450.325022, 0.784955, 0.383381),
        Nonane => ch(128.258, 470.840891, 0.8152731, 0.427354),
        Decane => ch(142.285, 489.558373, 0.8437826, 0.469659),
        Nitrogen => ch(28.0135, 99.73778, 0.4479153, 0.027815),
        CarbonDioxide => Characteristics {
            quadrupole: 0.69,
            ..ch(44.01, 241.9606, 0.4557489, 0.189065)
        },
        Helium => ch(4.0026, 2.610111, 0.3589888, 0.0),
        Hydrogen => Characteristics {
            high_temp: 1.0,
            ..ch(2.0159, 26.95794, 0.3514916, 0.034369)
        },
        Oxygen => ch(31.9988, 122.7667, 0.4186954, 0.021),
        CarbonMonoxide => ch(28.01, 105.5348, 0.4533894, 0.038953),
        Water => Characteristics {
            quadrupole: 1.06775,
            dipole: 1.5822,
            association: 1.0,
            ..ch(18.0153, 514.0156, 0.3825868, 0.3325)
        },
        HydrogenSulfide => Characteristics {
            quadrupole: 0.633276,
            dipole: 0.39,
            ..ch(34.082, 296.355, 0.4618263, 0.0885)
        },
        Argon => ch(39.948, 119.6299, 0.4216551, 0.0),
    }
}

/// Binary interaction parameters (E*, U*, K*, G*); unity for unlisted pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Binary {
    pub energy: f64,
    pub conformal: f64,
    pub size: f64,
    pub orientation: f64,
}

const UNIT_BINARY: Binary = Binary {
    energy: 1.0,
    conformal: 1.0,
    size: 1.0,
    orientation: 1.0,
};

const fn bin(energy: f64, conformal: f64, size: f64, orientation: f64) -> Binary {
    Binary {
        energy,
        conformal,
        size,
        orientation,
    }
}

pub(crate) fn binary(a: NgComponent, b: NgComponent) -> Binary {
    use NgComponent::*;
    let pair = if (a as u8) <= (b as u8) { (a, b) } else { (b, a) };
    match pair {
        (Methane, Ethane) => bin(0.994635, 0.990877, 1.0, 1.0),
        (Methane, Propane) => bin(0.989844, 0.992291, 1.0, 1.0),
        (Methane, Hexane) => bin(1.107274, 1.302576, 0.982962, 1.0),
        (Methane, Heptane) => bin(0.88088, 1.191904, 0.983565, 1.0),
        (Methane, Octane) => bin(0.880973, 1.205769, 0.982707, 1.0),
        (Methane, Nonane) => bin(0.881067, 1.219634, 0.981849, 1.0),
        (Methane, Decane) => bin(0.881161, 1.233498, 0.980991, 1.0),
        (Methane, Nitrogen) => bin(0.97164, 0.886106, 1.00363, 1.0),
        (Methane, CarbonDioxide) => bin(0.960644, 0.963827, 0.995933, 0.807653),
        (Methane, Hydrogen) => bin(1.17052, 1.15639, 1.02326, 1.95731),
        (Methane, Water) => bin(0.708218, 1.0, 1.0, 1.0),
        (Methane, HydrogenSulfide) => bin(0.931484, 0.736833, 1.00008, 1.0),
        (Ethane, Nitrogen) => bin(0.97012, 0.816431, 1.00796, 1.0),
        (Ethane, CarbonDioxide) => bin(0.925053, 0.96987, 1.00851, 0.370296),
        (Propane, Nitrogen) => bin(0.945939, 0.915502, 1.0, 1.0),
        (Propane, CarbonDioxide) => bin(0.960237, 1.0, 1.0, 1.0),
        (Nitrogen, CarbonDioxide) => bin(1.02274, 0.835058, 0.982361, 0.982746),
        (Nitrogen, Hydrogen) => bin(1.08632, 0.408838, 1.03227, 1.0),
        (CarbonDioxide, Water) => bin(0.849408, 1.0, 1.0, 1.67309),
        _ => UNIT_BINARY,
    }
}

/// One term of the residual compressibility expansion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EosTerm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub k: f64,
    pub u: f64,
    pub g: f64,
    pub q: f64,
    pub f: f64,
    pub s: f64,
    pub w: f64,
}

/// Terms entering the second virial coefficient.
pub(crate) const VIRIAL_TERM_COUNT: usize = 18;

pub(crate) const EOS_TERM_COUNT: usize = 58;

/// Index of the first term carrying a density-exponential part.
pub(crate) const FIRST_EXP_TERM: usize = 12;

const fn term(a: f64, b: f64, c: f64, k: f64, u: f64, flags: [f64; 5]) -> EosTerm {
    EosTerm {
        a,
        b,
        c,
        k,
        u,
        g: flags[0],
        q: flags[1],
        f: flags[2],
        s: flags[3],
        w: flags[4],
    }
}

const NO_FLAGS: [f64; 5] = [0.0; 5];
const G: [f64; 5] = [1.0, 0.0, 0.0, 0.0, 0.0];
const Q: [f64; 5] = [0.0, 1.0, 0.0, 0.0, 0.0];
const F: [f64; 5] = [0.0, 0.0, 1.0, 0.0, 0.0];
const S: [f64; 5] = [0.0, 0.0, 0.0, 1.0, 0.0];
const W: [f64; 5] = [0.0, 0.0, 0.0, 0.0, 1.0];

pub(crate) const EOS_TERMS: [EosTerm; EOS_TERM_COUNT] = [
    term(0.1538326, 1.0, 0.0, 0.0, 0.0, NO_FLAGS),
    term(1.341953, 1.0, 0.0, 0.0, 0.5, NO_FLAGS),
    term(-2.998583, 1.0, 0.0, 0.0, 1.0, NO_FLAGS),
    term(-0.04831228, 1.0, 0.0, 0.0, 3.5, NO_FLAGS),
    term(0.3757965, 1.0, 0.0, 0.0, -0.5, G),
    term(-1.589575, 1.0, 0.0, 0.0, 4.5, G),
    term(-0.05358847, 1.0, 0.0, 0.0, 0.5, Q),
    term(0.88659463, 1.0, 0.0, 0.0, 7.5, S),
    term(-0.71023704, 1.0, 0.0, 0.0, 9.5, S),
    term(-1.471722, 1.0, 0.0, 0.0, 6.0, W),
    term(1.32185035, 1.0, 0.0, 0.0, 12.0, W),
    term(-0.78665925, 1.0, 0.0, 0.0, 12.5, W),
    term(2.29129e-9, 1.0, 1.0, 3.0, -6.0, F),
    term(0.1576724, 1.0, 1.0, 2.0, 2.0, NO_FLAGS),
    term(-0.4363864, 1.0, 1.0, 2.0, 3.0, NO_FLAGS),
    term(-0.04408159, 1.0, 1.0, 2.0, 2.0, Q),
    term(-0.003433888, 1.0, 1.0, 4.0, 2.0, NO_FLAGS),
    term(0.03205905, 1.0, 1.0, 4.0, 11.0, NO_FLAGS),
    // density-only terms
    term(0.02487355, 2.0, 0.0, 0.0, -0.5, NO_FLAGS),
    term(0.07332279, 2.0, 0.0, 0.0, 0.5, NO_FLAGS),
    term(-0.001600573, 2.0, 1.0, 2.0, 0.0, NO_FLAGS),
    term(0.6424706, 2.0, 1.0, 2.0, 4.0, NO_FLAGS),
    term(-0.4162601, 2.0, 1.0, 2.0, 6.0, NO_FLAGS),
    term(-0.06689957, 2.0, 1.0, 4.0, 21.0, NO_FLAGS),
    term(0.2791795, 2.0, 1.0, 4.0, 23.0, G),
    term(-0.6966051, 2.0, 1.0, 4.0, 22.0, Q),
    term(-0.002860589, 2.0, 1.0, 4.0, -1.0, F),
    term(-0.008098836, 3.0, 0.0, 0.0, -0.5, Q),
    term(3.150547, 3.0, 1.0, 1.0, 7.0, G),
    term(0.007224479, 3.0, 1.0, 1.0, -1.0, F),
    term(-0.7057529, 3.0, 1.0, 2.0, 6.0, NO_FLAGS),
    term(0.5349792, 3.0, 1.0, 2.0, 4.0, G),
    term(-0.07931491, 3.0, 1.0, 3.0, 1.0, G),
    term(-1.418465, 3.0, 1.0, 3.0, 9.0, G),
    term(-5.99905e-17, 3.0, 1.0, 4.0, -13.0, F),
    term(0.1058402, 3.0, 1.0, 4.0, 21.0, NO_FLAGS),
    term(0.03431729, 3.0, 1.0, 4.0, 8.0, Q),
    term(-0.007022847, 4.0, 0.0, 0.0, -0.5, NO_FLAGS),
    term(0.02495587, 4.0, 0.0, 0.0, 0.0, NO_FLAGS),
    term(0.04296818, 4.0, 1.0, 2.0, 2.0, NO_FLAGS),
    term(0.7465453, 4.0, 1.0, 2.0, 7.0, NO_FLAGS),
    term(-0.2919613, 4.0, 1.0, 2.0, 9.0, Q),
    term(7.294616, 4.0, 1.0, 4.0, 22.0, NO_FLAGS),
    term(-9.936757, 4.0, 1.0, 4.0, 23.0, NO_FLAGS),
    term(-0.005399808, 5.0, 0.0, 0.0, 1.0, NO_FLAGS),
    term(-0.2432567, 5.0, 1.0, 2.0, 9.0, NO_FLAGS),
    term(0.04987016, 5.0, 1.0, 2.0, 3.0, Q),
    term(0.003733797, 5.0, 1.0, 4.0, 8.0, NO_FLAGS),
    term(1.874951, 5.0, 1.0, 4.0, 23.0, Q),
    term(0.002168144, 6.0, 0.0, 0.0, 1.5, NO_FLAGS),
    term(-0.6587164, 6.0, 1.0, 2.0, 5.0, G),
    term(0.000205518, 7.0, 0.0, 0.0, -0.5, Q),
    term(0.009776195, 7.0, 1.0, 2.0, 4.0, NO_FLAGS),
    term(-0.02048708, 8.0, 1.0, 1.0, 7.0, G),
    term(0.01557322, 8.0, 1.0, 2.0, 3.0, NO_FLAGS),
    term(0.006862415, 8.0, 1.0, 2.0, 0.0, G),
    term(-0.001226752, 9.0, 1.0, 2.0, 1.0, NO_FLAGS),
    term(0.002850908, 9.0, 1.0, 2.0, 0.0, Q),
];

/// Ideal-gas heat capacity coefficients [cal/(mol·K)]:
/// `cp0 = B + C·(D/T / sinh(D/T))² + E·(F/T / cosh(F/T))²
///      + G·(H/T / sinh(H/T))² + I·(J/T / cosh(J/T))²`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdealHeatCapacity {
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub i: f64,
    pub j: f64,
}

const fn cp(b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64, i: f64, j: f64) -> IdealHeatCapacity {
    IdealHeatCapacity {
        b,
        c,
        d,
        e,
        f,
        g,
        h,
        i,
        j,
    }
}

/// Only the first two hyperbolic terms are populated.
const fn cp2(b: f64, c: f64, d: f64, e: f64, f: f64) -> IdealHeatCapacity {
    cp(b, c, d, e, f, 0.0, 100.0, 0.0, 100.0)
}

pub(crate) fn ideal_heat_capacity(c: NgComponent) -> IdealHeatCapacity {
    use NgComponent::*;
    match c {
        Methane => cp(7.95454, 43.9417, 1037.09, 1.56373, 813.205, -24.9027, 1019.98, -10.1601, 1070.14),
        Ethane => cp(7.98139, 24.3668, 752.320, 3.53990, 272.846, 8.44724, 1020.13, -13.2732, 869.510),
        Propane => cp(8.14319, 37.0629, 735.402, 9.38159, 247.190, 13.4556, 1454.78, -11.7342, 984.518),
        IsoButane => cp2(17.8143, 58.2062, 1787.39, 40.7621, 808.645),
        NButane => cp2(18.6383, 57.4178, 1792.73, 38.6599, 814.151),
        IsoPentane => cp2(21.3861, 74.3410, 1701.58, 47.0587, 775.899),
        NPentane => cp2(22.5012, 69.5789, 1719.58, 46.2164, 802.174),
        Hexane => cp2(26.6225, 80.3819, 1718.49, 55.6598, 802.069),
        Heptane => cp2(30.4029, 90.6941, 1669.32, 63.2028, 786.001),
        Octane => cp2(34.0847, 100.253, 1611.55, 69.7675, 768.847),
        Nonane => cp2(38.5014, 111.446, 1646.48, 80.5015, 781.588),
        Decane => cp2(42.7143, 122.173, 1654.85, 90.2255, 785.564),
        Nitrogen => cp(6.95587, 0.272892, 662.738, -0.291318, -680.562, 1.78980, 1740.06, 0.0, 100.0),
        CarbonDioxide => cp(6.96237, 2.68645, 500.371, -2.56429, -530.443, 3.91921, 500.198, 2.13290, 2197.22),
        Helium | Argon => cp2(4.968, 0.0, 100.0, 0.0, 100.0),
        Hydrogen => cp2(6.66789, 2.33458, 2584.98, 0.749019, 559.656),
        Oxygen => cp2(6.96302, 2.40013, 2522.05, 2.21752, 1154.15),
        CarbonMonoxide => cp2(6.95854, 2.02441, 1541.22, 0.096774, 3674.81),
        Water => cp2(7.97183, 6.27078, 2572.63, 2.05010, 1156.72),
        HydrogenSulfide => cp(7.94680, -0.08380, 433.801, 2.85539, 843.792, 6.31595, 1481.43, -2.88457, 1102.23),
    }
}

/// Critical temperature [K], critical density [kg/m³] and acentric factor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Critical {
    pub temperature: f64,
    pub density: f64,
    pub acentric: f64,
}

const fn crit(temperature: f64, density: f64, acentric: f64) -> Critical {
    Critical {
        temperature,
        density,
        acentric,
    }
}

pub(crate) fn critical(c: NgComponent) -> Critical {
    use NgComponent::*;
    match c {
        Methane => crit(190.564, 162.66, 0.01142),
        Ethane => crit(305.32, 206.18, 0.0995),
        Propane => crit(369.825, 220.48, 0.1521),
        IsoButane => crit(407.817, 225.5, 0.184),
        NButane => crit(425.125, 228.0, 0.201),
        IsoPentane => crit(460.35, 236.0, 0.2274),
        NPentane => crit(469.7, 232.0, 0.251),
        Hexane => crit(507.82, 233.18, 0.299),
        Heptane => crit(540.13, 232.0, 0.349),
        Octane => crit(569.32, 234.9, 0.393),
        Nonane => crit(594.55, 232.1, 0.443),
        Decane => crit(617.7, 233.3, 0.4884),
        Nitrogen => crit(126.192, 313.3, 0.0372),
        CarbonDioxide => crit(304.1282, 467.6, 0.22394),
        Helium => crit(5.1953, 69.64, -0.385),
        Hydrogen => crit(33.145, 31.26, -0.219),
        Oxygen => crit(154.581, 436.14, 0.0222),
        CarbonMonoxide => crit(132.86, 303.9, 0.0497),
        Water => crit(647.096, 322.0, 0.3443),
        HydrogenSulfide => crit(373.1, 347.28, 0.1005),
        Argon => crit(150.687, 535.6, -0.00219),
    }
}
