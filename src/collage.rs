use crate::constants::{CLASS_PHOTO_ITEM, COLLAGE_CONTAINER_ID};
use crate::core::collage::{drift, layout, photo_urls, CollageGrid, PhotoDrift};
use crate::core::constants::COLLAGE_REPEATS;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn animate_drift(el: &web::Element, d: &PhotoDrift) {
    _ = dom::animate(
        el,
        &[
            dom::keyframe(&[(
                "transform",
                format!("translate(0, 0) rotate({}deg)", d.rotate_start_deg).into(),
            )]),
            dom::keyframe(&[(
                "transform",
                format!(
                    "translate({}px, {}px) rotate({}deg)",
                    d.dest_x_px, d.dest_y_px, d.rotate_end_deg
                )
                .into(),
            )]),
        ],
        dom::AnimationTiming::forever_alternate(d.duration_ms, "ease-in-out"),
    );
}

/// Scatter the photo collage behind the screens. No-op if already rendered.
pub fn render(document: &web::Document, distinct_photos: usize) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(COLLAGE_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", COLLAGE_CONTAINER_ID))?;
    if container.child_element_count() > 0 {
        return Ok(());
    }

    let mut rng = rand::thread_rng();
    let urls = photo_urls(distinct_photos, COLLAGE_REPEATS);
    let placements = layout(&urls, CollageGrid::default(), &mut rng);
    for p in &placements {
        let item = dom::create_div(document, CLASS_PHOTO_ITEM)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::set_styles(
            &item,
            &[
                ("width", &format!("{}px", p.width_px)),
                ("height", &format!("{}px", p.height_px)),
                ("left", &format!("{}vw", p.left_vw)),
                ("top", &format!("{}vh", p.top_vh)),
                ("transform", &format!("rotate({}deg)", p.rotate_deg)),
                ("opacity", "1"),
            ],
        );
        let img = document
            .create_element("img")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlImageElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        img.set_src(&p.url);
        img.set_alt("");
        _ = item.append_child(&img);
        _ = container.append_child(&item);
        animate_drift(&item, &drift(&mut rng));
    }
    log::info!("collage: {} photos", placements.len());
    Ok(())
}
