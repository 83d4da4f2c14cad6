use termcandle::axis::PriceFormat;

#[test]
fn cell_width_counts_separator() {
    let format = PriceFormat {
        int_width: 6,
        dec_precision: 2,
    };
    assert_eq!(format.cell_width(), 9);
}

#[test]
fn token_uses_fixed_decimal_precision() {
    let format = PriceFormat {
        int_width: 6,
        dec_precision: 2,
    };
    assert_eq!(format.format(150.0), "150.00");
    assert_eq!(format.format(0.5), "0.50");
    assert_eq!(format.format(101.739), "101.74");
}

#[test]
fn cell_is_left_aligned_to_canonical_width() {
    let format = PriceFormat {
        int_width: 6,
        dec_precision: 2,
    };
    let cell = format.format_cell(150.0);
    assert_eq!(cell.len(), format.cell_width());
    assert_eq!(cell, "150.00   ");
}

#[test]
fn oversized_tokens_keep_all_digits() {
    let format = PriceFormat {
        int_width: 2,
        dec_precision: 2,
    };
    // wider than int_width allows: never truncated
    let cell = format.format_cell(123_456.78);
    assert_eq!(cell, "123456.78");
    assert!(cell.len() > format.cell_width());
}

#[test]
fn zero_decimal_precision_drops_the_fraction() {
    let format = PriceFormat {
        int_width: 6,
        dec_precision: 0,
    };
    assert_eq!(format.format(150.6), "151");
    assert_eq!(format.format_cell(150.6).len(), format.cell_width());
}

#[test]
fn default_layout_matches_documented_width() {
    let format = PriceFormat::default();
    assert_eq!(format.cell_width(), 11);
}
