//! Shared card markup
//!
//! Both embed forms render through these builders, so a pasted snippet and a
//! hosted frame produce the same element tree. Element ids carry the card's
//! random suffix, which keeps several cards on one page independent.

use crate::card::CardConfig;
use crate::embed::escape;
use crate::style::{SizeSpec, Theme};

/// Font stack for the title, digits and separators.
pub const HEADING_FONT: &str = "'Fredoka',system-ui,sans-serif";
/// Font stack for unit labels and the attribution line.
pub const BODY_FONT: &str = "'Nunito',system-ui,sans-serif";

pub(crate) const ATTRIBUTION: &str = "Made with Countdown Card";

/// Static HTML of one card.
///
/// Digits start as `00` placeholders; the tick script fills them in on its
/// first pass. The title element is skipped entirely when the title is empty.
pub fn card_markup(config: &CardConfig, id: &str, base_url: &str) -> String {
    let theme = Theme::of(config.theme);
    let size = SizeSpec::of(config.size);

    let units = config.visible_units();
    let mut row = Vec::new();
    for (index, unit) in units.iter().enumerate() {
        row.push(format!(
            concat!(
                r#"<div style="background:{block_bg};border:2px solid {border};"#,
                r#"border-radius:{block_radius}px;padding:{block_pad};text-align:center;"#,
                r#"min-width:{min_width}px;box-shadow:3px 3px 0 {shadow}">"#,
                r#"<div id="cd{key}{id}" style="font-size:{digit}px;font-weight:800;"#,
                r#"color:{digit_color};line-height:1.2;font-family:{heading}">00</div>"#,
                r#"<div style="font-size:{label}px;color:{label_color};margin-top:4px;"#,
                r#"font-family:{body}">{unit_label}</div></div>"#,
            ),
            block_bg = theme.digit_bg,
            border = theme.border,
            block_radius = size.block_radius(),
            block_pad = size.block_pad,
            min_width = size.block_min_width(),
            shadow = theme.shadow,
            key = unit.key(),
            id = id,
            digit = size.digit,
            digit_color = theme.digit_text,
            heading = HEADING_FONT,
            label = size.label,
            label_color = theme.label_text,
            body = BODY_FONT,
            unit_label = unit.label(),
        ));
        if index + 1 < units.len() {
            row.push(format!(
                concat!(
                    r#"<div style="font-size:{font}px;font-weight:800;color:{color};"#,
                    r#"align-self:center;padding-bottom:{drop}px;font-family:{heading}">:</div>"#,
                ),
                font = size.separator_font(),
                color = theme.digit_text,
                drop = size.separator_drop(),
                heading = HEADING_FONT,
            ));
        }
    }

    let mut out = format!(
        concat!(
            r#"<div id="ct{id}" style="background:{card_bg};border:3px solid {border};"#,
            r#"border-radius:{radius}px;padding:{padding}px;text-align:center;"#,
            r#"box-shadow:4px 4px 0 {shadow};display:inline-block;"#,
            "font-family:system-ui,sans-serif\">\n",
        ),
        id = id,
        card_bg = theme.card_bg,
        border = theme.border,
        radius = size.radius,
        padding = size.padding,
        shadow = theme.shadow,
    );
    if !config.title.is_empty() {
        out.push_str(&format!(
            concat!(
                r#"  <div style="font-size:{font}px;font-weight:700;color:{color};"#,
                "margin-bottom:{gap}px;font-family:{heading}\">{title}</div>\n",
            ),
            font = size.title,
            color = theme.title_text,
            gap = size.title_gap(),
            heading = HEADING_FONT,
            title = escape::html(&config.title),
        ));
    }
    out.push_str(&format!(
        concat!(
            r#"  <div id="ctb{id}" style="display:flex;align-items:flex-start;"#,
            "justify-content:center;gap:{gap}px\">\n    {row}\n  </div>\n",
        ),
        id = id,
        gap = size.gap,
        row = row.join("\n    "),
    ));
    out.push_str(&format!(
        concat!(
            r#"  <div style="margin-top:{gap}px;font-size:10px;color:{color};opacity:0.6;"#,
            "font-family:{body}\">\n",
            r#"    <a href="{url}" target="_blank" rel="noopener" "#,
            "style=\"color:inherit;text-decoration:none\">{attribution}</a>\n",
            "  </div>\n</div>",
        ),
        gap = size.title_gap(),
        color = theme.label_text,
        body = BODY_FONT,
        url = escape::html(base_url),
        attribution = ATTRIBUTION,
    ));
    out
}

/// The inline script that drives one card.
///
/// Recomputes the remaining time from the wall clock on every pass, so a
/// tab left in the background catches up the moment it is foregrounded.
/// Days render unpadded; hours, minutes and seconds are zero-padded. Once
/// the target passes, the block row is swapped for the expired text.
pub fn tick_script(config: &CardConfig, id: &str) -> String {
    let theme = Theme::of(config.theme);
    let size = SizeSpec::of(config.size);
    let keys = config
        .visible_units()
        .iter()
        .map(|unit| format!("\"{}\"", unit.key()))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"<script>
(function(){{
  var T=new Date("{date}").getTime(),E="{expired}",U=[{keys}],I="{id}";
  function p(n){{return n<10?"0"+n:""+n}}
  function u(){{
    var d=T-Date.now();
    if(d<=0){{
      var b=document.getElementById("ctb"+I);
      if(b)b.innerHTML='<div style="font-size:{title_font}px;font-weight:700;color:{accent};padding:{padding}px;font-family:Fredoka,system-ui,sans-serif">'+E+'</div>';
      return;
    }}
    var D=Math.floor(d/864e5),H=Math.floor(d%864e5/36e5),M=Math.floor(d%36e5/6e4),S=Math.floor(d%6e4/1e3);
    var v={{d:D,h:H,m:M,s:S}};
    U.forEach(function(k){{var e=document.getElementById("cd"+k+I);if(e)e.textContent=k==="d"?(""+v[k]):p(v[k])}});
  }}
  u();setInterval(u,1000);
}})();
</script>"#,
        date = escape::js(&config.target),
        expired = escape::js(&escape::html(&config.expired_text)),
        keys = keys,
        id = id,
        title_font = size.title,
        accent = theme.accent,
        padding = size.padding,
    )
}
