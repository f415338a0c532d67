// ---------------------------------------------------------------------------
// Static line catalog
// ---------------------------------------------------------------------------

/// Rest-frame wavelengths (Ångström) of one ion group.
#[derive(Debug, Clone, Copy)]
pub struct IonLines {
    pub label: &'static str,
    pub rest: &'static [f64],
}

/// Ion groups in display order. Labels are unique.
pub static ION_CATALOG: &[IonLines] = &[
    IonLines {
        label: "H",
        rest: &[3970.0, 4102.0, 4341.0, 4861.0, 6563.0, 10052.0, 10941.0, 12822.0, 18756.0],
    },
    IonLines {
        label: "He I",
        rest: &[3889.0, 4471.0, 5876.0, 6678.0, 7065.0],
    },
    IonLines {
        label: "He II",
        rest: &[3203.0, 4686.0, 5411.0, 6560.0, 6683.0, 6891.0, 8237.0, 10124.0],
    },
    IonLines {
        label: "C II",
        rest: &[
            3919.0, 3921.0, 4267.0, 5145.0, 5890.0, 6578.0, 7231.0, 7236.0, 9234.0, 9891.0,
        ],
    },
    IonLines {
        label: "C III",
        rest: &[4647.0, 4650.0, 5696.0, 6742.0, 8500.0, 8665.0, 9711.0],
    },
    IonLines {
        label: "C IV",
        rest: &[4658.0, 5801.0, 5812.0, 7061.0, 7726.0, 8859.0],
    },
    IonLines {
        label: "N II",
        rest: &[3995.0, 4631.0, 5005.0, 5680.0, 5942.0, 6482.0, 6611.0],
    },
    IonLines {
        label: "N III",
        rest: &[4634.0, 4641.0, 4687.0, 5321.0, 5327.0, 6467.0],
    },
    IonLines {
        label: "N IV",
        rest: &[3479.0, 3483.0, 3485.0, 4058.0, 6381.0, 7115.0],
    },
    IonLines {
        label: "N V",
        rest: &[4604.0, 4620.0, 4945.0],
    },
    IonLines {
        label: "O I",
        rest: &[6158.0, 7772.0, 7774.0, 7775.0, 8446.0, 9263.0],
    },
    IonLines {
        label: "[O I]",
        rest: &[5577.0, 6300.0, 6363.0],
    },
    IonLines {
        label: "O II",
        rest: &[
            3390.0, 3377.0, 4416.0, 6641.0, 6721.0, 3738.0, 3960.0, 4115.0, 4358.0, 4651.0,
        ],
    },
    IonLines {
        label: "[O II]",
        rest: &[3726.0, 3729.0],
    },
    IonLines {
        label: "[O III]",
        rest: &[4363.0, 4959.0, 5007.0],
    },
    IonLines {
        label: "O V",
        rest: &[3145.0, 4124.0, 4930.0, 5598.0, 6500.0],
    },
    IonLines {
        label: "O VI",
        rest: &[3811.0, 3834.0],
    },
    IonLines {
        label: "Na I",
        rest: &[5890.0, 5896.0, 8183.0, 8195.0],
    },
    IonLines {
        label: "Mg I",
        rest: &[
            3829.0, 3832.0, 3838.0, 4571.0, 4703.0, 5167.0, 5173.0, 5184.0, 5528.0, 8807.0,
        ],
    },
    IonLines {
        label: "Mg II",
        rest: &[
            2796.0, 2798.0, 2803.0, 4481.0, 7877.0, 7896.0, 8214.0, 8235.0, 9218.0, 9244.0,
            9632.0,
        ],
    },
    IonLines {
        label: "Si II",
        rest: &[4128.0, 4131.0, 5958.0, 5979.0, 6347.0, 6371.0],
    },
    IonLines {
        label: "S II",
        rest: &[5433.0, 5454.0, 5606.0, 5640.0, 5647.0, 6715.0, 13529.0, 14501.0],
    },
    IonLines {
        label: "Ca II",
        rest: &[3159.0, 3180.0, 3706.0, 3737.0, 3934.0, 3969.0, 8498.0, 8542.0, 8662.0],
    },
    IonLines {
        label: "[Ca II]",
        rest: &[7292.0, 7324.0],
    },
    IonLines {
        label: "Fe II",
        rest: &[
            4303.0, 4352.0, 4515.0, 4549.0, 4924.0, 5018.0, 5169.0, 5198.0, 5235.0, 5363.0,
        ],
    },
    IonLines {
        label: "Fe III",
        rest: &[4397.0, 4421.0, 4432.0, 5129.0, 5158.0],
    },
    IonLines {
        label: "Galaxy lines",
        rest: &[
            4341.0, 4861.0, 6563.0, 6548.0, 6583.0, 3727.0, 4959.0, 5007.0, 5890.0, 5896.0,
            2798.0, 6717.0, 6731.0, 3969.0, 3934.0, 2025.0, 2056.0, 2062.0, 2066.0, 2249.0,
            2260.0, 2343.0, 2374.0, 2382.0, 2586.0, 2599.0, 2576.0, 2594.0, 2852.0,
        ],
    },
];

/// Atmospheric absorption features. Never shifted, always shown.
pub static TELLURIC_LINES: &[f64] = &[6867.0, 6884.0, 7594.0, 7621.0];

/// Find an ion group by its label.
pub fn lookup(label: &str) -> Option<&'static IonLines> {
    ION_CATALOG.iter().find(|ion| ion.label == label)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_labels_unique() {
        let labels: BTreeSet<&str> = ION_CATALOG.iter().map(|ion| ion.label).collect();
        assert_eq!(labels.len(), ION_CATALOG.len());
    }

    #[test]
    fn test_no_empty_groups() {
        assert!(ION_CATALOG.iter().all(|ion| !ion.rest.is_empty()));
    }

    #[test]
    fn test_lookup() {
        let h = lookup("H").unwrap();
        assert!(h.rest.contains(&4861.0));
        assert_eq!(lookup("[Ca II]").unwrap().rest, &[7292.0, 7324.0]);
        assert!(lookup("Unobtainium").is_none());
    }
}
