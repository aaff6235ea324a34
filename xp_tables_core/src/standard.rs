//! Literal rules tables
//!
//! Columns follow each ruleset's canonical difficulty order.

/// 2024 XP budget per character: Low, Moderate, High
pub(crate) const BUDGETS_2024: &[(u8, [u32; 3])] = &[
    (1, [50, 75, 100]),
    (2, [100, 150, 200]),
    (3, [150, 225, 400]),
    (4, [250, 375, 500]),
    (5, [500, 750, 1100]),
    (6, [600, 1000, 1400]),
    (7, [750, 1300, 1700]),
    (8, [900, 1500, 2100]),
    (9, [1100, 1800, 2400]),
    (10, [1250, 2000, 2800]),
    (11, [1400, 2300, 3200]),
    (12, [1600, 2500, 3600]),
    (13, [1800, 2800, 4000]),
    (14, [2000, 3100, 4400]),
    (15, [2200, 3400, 4800]),
    (16, [2400, 3700, 5200]),
    (17, [2700, 4000, 5700]),
    (18, [2900, 4300, 6100]),
    (19, [3100, 4600, 6600]),
    (20, [3400, 5000, 7000]),
];

/// 2014 XP threshold per character: Facile, Media, Difficile, Letale
pub(crate) const THRESHOLDS_2014: &[(u8, [u32; 4])] = &[
    (1, [25, 50, 75, 100]),
    (2, [50, 100, 150, 200]),
    (3, [75, 150, 225, 400]),
    (4, [125, 250, 375, 500]),
    (5, [250, 500, 750, 1100]),
    (6, [300, 600, 900, 1400]),
    (7, [350, 750, 1100, 1700]),
    (8, [450, 900, 1400, 2100]),
    (9, [550, 1100, 1600, 2400]),
    (10, [600, 1200, 1900, 2800]),
    (11, [800, 1600, 2400, 3600]),
    (12, [1000, 2000, 3000, 4500]),
    (13, [1100, 2200, 3400, 5100]),
    (14, [1250, 2500, 3800, 5700]),
    (15, [1400, 2800, 4300, 6400]),
    (16, [1600, 3200, 4800, 7200]),
    (17, [2000, 3900, 5900, 8800]),
    (18, [2100, 4200, 6300, 9500]),
    (19, [2400, 4900, 7300, 10900]),
    (20, [2800, 5700, 8500, 12700]),
];

/// (max monsters, multiplier), ascending
pub(crate) const MULTIPLIER_BANDS: &[(i32, f64)] = &[
    (1, 1.0),
    (2, 1.5),
    (3, 2.0),
    (7, 2.5),
    (11, 3.0),
    (15, 4.0),
    (99, 5.0),
];
