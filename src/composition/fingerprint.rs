use crate::{
    composition::render::{FrameOutput, LayerRole},
    foundation::core::Vec2,
    scene::snapshot::ParamValue,
    transition::presentation::{LayerBlend, Presentation, SlideDirection, WipeDir},
};

/// 128-bit digest of a [`FrameOutput`] built from two independently seeded FNV-1a lanes.
///
/// Floats are hashed by bit pattern, so two outputs share a fingerprint only if every value is
/// bit-identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameFingerprint {
    /// First lane.
    pub hi: u64,
    /// Second lane.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

impl serde::Serialize for FrameFingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Two FNV-1a 64 states fed the same bytes from different offset bases.
struct Lanes([u64; 2]);

impl Lanes {
    fn new() -> Self {
        Self([0xcbf2_9ce4_8422_2325, 0x9ae1_6a3b_2f90_404f])
    }

    fn bytes(&mut self, bytes: &[u8]) {
        for lane in &mut self.0 {
            for &b in bytes {
                *lane ^= u64::from(b);
                *lane = lane.wrapping_mul(FNV_PRIME);
            }
        }
    }

    fn u8(&mut self, v: u8) {
        self.bytes(&[v]);
    }

    fn u64(&mut self, v: u64) {
        self.bytes(&v.to_le_bytes());
    }

    /// Bit pattern, so `0.0` and `-0.0` differ.
    fn f64(&mut self, v: f64) {
        self.u64(v.to_bits());
    }

    /// Length-prefixed, so `("ab", "c")` and `("a", "bc")` differ.
    fn str(&mut self, s: &str) {
        self.u64(s.len() as u64);
        self.bytes(s.as_bytes());
    }

    fn vec2(&mut self, v: Vec2) {
        self.f64(v.x);
        self.f64(v.y);
    }

    fn finish(self) -> FrameFingerprint {
        let [hi, lo] = self.0;
        FrameFingerprint { hi, lo }
    }
}

/// Hash every value of `out`, layers and snapshots included.
pub fn fingerprint_frame(out: &FrameOutput) -> FrameFingerprint {
    let mut h = Lanes::new();
    h.u64(out.frame.0);

    h.u64(out.layers.len() as u64);
    for layer in &out.layers {
        h.u8(match layer.role {
            LayerRole::Solo => 0,
            LayerRole::Outgoing => 1,
            LayerRole::Incoming => 2,
        });
        h.u64(layer.scene_index as u64);
        h.str(layer.scene_kind);
        h.u64(layer.local_frame.0);
        write_blend(&mut h, &layer.blend);

        h.u64(layer.snapshot.len() as u64);
        for (key, value) in layer.snapshot.iter() {
            h.str(key);
            match value {
                ParamValue::Scalar(v) => {
                    h.u8(0);
                    h.f64(v);
                }
                ParamValue::Color(c) => {
                    h.u8(1);
                    for byte in [c.r, c.g, c.b, c.a] {
                        h.u8(byte);
                    }
                }
            }
        }
    }

    match &out.transition {
        Some(t) => {
            h.u8(1);
            write_presentation(&mut h, &t.presentation);
            h.u64(t.elapsed_frames);
            h.u64(t.overlap_frames);
            h.f64(t.progress);
        }
        None => h.u8(0),
    }

    h.u64(out.artifacts.len() as u64);
    for a in &out.artifacts {
        h.str(&a.filename);
    }

    h.finish()
}

fn write_blend(h: &mut Lanes, blend: &LayerBlend) {
    h.vec2(blend.offset);
    h.f64(blend.opacity);
    match &blend.wipe {
        Some(w) => {
            h.u8(1);
            h.u8(wipe_dir_tag(w.dir));
            h.f64(w.coverage);
            h.f64(w.soft_edge);
        }
        None => h.u8(0),
    }
}

fn write_presentation(h: &mut Lanes, p: &Presentation) {
    match *p {
        Presentation::Slide { direction } => {
            h.u8(0);
            h.u8(match direction {
                SlideDirection::FromLeft => 0,
                SlideDirection::FromRight => 1,
                SlideDirection::FromTop => 2,
                SlideDirection::FromBottom => 3,
            });
        }
        Presentation::Fade => h.u8(1),
        Presentation::Wipe { dir, soft_edge } => {
            h.u8(2);
            h.u8(wipe_dir_tag(dir));
            h.f64(soft_edge);
        }
    }
}

fn wipe_dir_tag(dir: WipeDir) -> u8 {
    match dir {
        WipeDir::LeftToRight => 0,
        WipeDir::RightToLeft => 1,
        WipeDir::TopToBottom => 2,
        WipeDir::BottomToTop => 3,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/fingerprint.rs"]
mod tests;
