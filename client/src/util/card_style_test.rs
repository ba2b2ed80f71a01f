use super::*;

#[test]
fn card_style_cycles_every_four_ids() {
    assert_eq!(card_style(0), card_style(4));
    assert_eq!(card_style(1), card_style(5));
    assert_ne!(card_style(1), card_style(2));
}

#[test]
fn card_style_maps_known_ids() {
    assert_eq!(card_style(1).accent, "indigo");
    assert_eq!(card_style(2).accent, "rose");
    assert_eq!(card_style(3).accent, "amber");
    assert_eq!(card_style(8).accent, "blue");
}

#[test]
fn card_style_handles_negative_ids() {
    assert_eq!(card_style(-1), card_style(3));
}

#[test]
fn timestamp_ids_still_map_into_palette() {
    let style = card_style(1_700_000_000_001);
    assert_eq!(style, card_style(1));
}

#[test]
fn featured_positions_are_first_and_eighth() {
    let featured: Vec<usize> = (0..10).filter(|&i| is_featured(i)).collect();
    assert_eq!(featured, vec![0, 7]);
}
