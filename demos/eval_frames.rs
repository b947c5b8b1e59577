use motif::{FrameIndex, fingerprint_frame, reference::promo_composition};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let comp = promo_composition()?;

    for f in [0u64, 38, 43, 50, 106, 269] {
        let out = comp.render_frame(FrameIndex(f))?;
        let kinds: Vec<_> = out.layers.iter().map(|l| l.scene_kind).collect();
        let progress = out.transition.map(|t| t.progress);
        println!(
            "frame {f}: {:?} progress={progress:?} artifacts={} fingerprint={}",
            kinds,
            out.artifacts.len(),
            fingerprint_frame(&out)
        );
    }

    Ok(())
}
