use eframe::egui::Color32;
use shared::domain::Verdict;

pub struct BoxPalette {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

pub const ERROR_BOX: BoxPalette = BoxPalette {
    fill: Color32::from_rgb(0xfd, 0xec, 0xea),
    stroke: Color32::from_rgb(0xe5, 0x73, 0x73),
    text: Color32::from_rgb(0xb7, 0x1c, 0x1c),
};

const SAFE_BOX: BoxPalette = BoxPalette {
    fill: Color32::from_rgb(0xe8, 0xf5, 0xe9),
    stroke: Color32::from_rgb(0x66, 0xbb, 0x6a),
    text: Color32::from_rgb(0x1b, 0x5e, 0x20),
};

const DANGER_BOX: BoxPalette = BoxPalette {
    fill: Color32::from_rgb(0xff, 0xeb, 0xee),
    stroke: Color32::from_rgb(0xef, 0x53, 0x50),
    text: Color32::from_rgb(0xc6, 0x28, 0x28),
};

pub fn verdict_palette(verdict: Verdict) -> &'static BoxPalette {
    match verdict {
        Verdict::Safe => &SAFE_BOX,
        Verdict::Danger => &DANGER_BOX,
    }
}
