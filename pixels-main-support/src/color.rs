const ALIVE_COLOR: [u8; 4] = [0x80, 0x80, 0x80, 0xff];
const DEAD_COLOR: [u8; 4] = [0x00, 0x00, 0x40, 0xff];
const SELECTED_TINT: [u8; 4] = [0xff, 0xc0, 0x00, 0x60];

pub(crate) fn cell_color_rgba(alive: bool, selected: bool) -> [u8; 4] {
    let base = if alive { ALIVE_COLOR } else { DEAD_COLOR };
    if selected {
        alpha_blend_with_background(SELECTED_TINT, base)
    } else {
        base
    }
}

// From https://en.wikipedia.org/wiki/Alpha_compositing, with below_alpha set to 1.0
fn alpha_blend_with_background(above: [u8; 4], below: [u8; 4]) -> [u8; 4] {
    if above[3] == 0xff {
        return above;
    }
    if above[3] == 0x00 {
        return below;
    }

    let above = color_as_fractions(above);
    let below = color_as_fractions(below);
    let above_alpha = above[3];

    let mut result: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    for (channel, (above, below)) in result.iter_mut().zip(above.iter().zip(below)).take(3) {
        *channel = above * above_alpha + below * (1.0 - above_alpha);
    }
    color_as_bytes(result)
}

fn color_as_fractions(color: [u8; 4]) -> [f32; 4] {
    color.map(|component| component as f32 / 0xff as f32)
}

fn color_as_bytes(color: [f32; 4]) -> [u8; 4] {
    color.map(|component| (component * 0xff as f32).round() as u8)
}
