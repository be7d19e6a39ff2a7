//! Invoice rendering.
//!
//! Lays out the shop's fixed A5 invoice template for one facture and
//! its linked visite: prescription table, the three billed lines
//! (frame + both lenses), the amount in French words, and the legal
//! footer. The billed total is `priceOD + priceOS + prixmonture`,
//! computed here from the prescription prices; the visite's stored
//! `total`/`reste` figures are a separate running account and are not
//! consulted.

use std::fmt;

use num2words::{Lang, Num2Words};
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use crate::models::facture::FactureDto;
use crate::models::visite::VisiteDto;
use crate::validation::parse_date;

#[derive(Debug)]
pub struct PdfError(pub String);

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDF rendering error: {}", self.0)
    }
}

impl std::error::Error for PdfError {}

/// Billed invoice total: both lenses plus the frame.
pub fn invoice_total(visite: &VisiteDto) -> f64 {
    visite.price_od.unwrap_or_default()
        + visite.price_os.unwrap_or_default()
        + visite.prixmonture.unwrap_or_default()
}

/// French words for the billed amount ("Montant en lettres").
pub fn amount_in_words_fr(amount: f64) -> String {
    let value = amount.round() as i64;
    Num2Words::new(value)
        .lang(Lang::French)
        .to_words()
        .unwrap_or_else(|_| value.to_string())
}

/// Amounts print without decimals when whole, as the shop writes them.
fn fmt_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn fmt_date_fr(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

fn hline(layer: &PdfLayerReference, y: f64, x0: f64, x1: f64) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x0 as f32), Mm(y as f32)), false),
            (Point::new(Mm(x1 as f32), Mm(y as f32)), false),
        ],
        is_closed: false,
    });
}

fn boxed(layer: &PdfLayerReference, x0: f64, y0: f64, x1: f64, y1: f64) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x0 as f32), Mm(y0 as f32)), false),
            (Point::new(Mm(x1 as f32), Mm(y0 as f32)), false),
            (Point::new(Mm(x1 as f32), Mm(y1 as f32)), false),
            (Point::new(Mm(x0 as f32), Mm(y1 as f32)), false),
        ],
        is_closed: true,
    });
}

fn row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f64,
    y: f64,
    cells: &[(f64, &str)],
) {
    for (x, text) in cells {
        layer.use_text(*text, size as f32, Mm(*x as f32), Mm(y as f32), font);
    }
}

/// Renders the fixed one-page A5 invoice. Always exactly one frame
/// and two lens line items.
pub fn render(facture: &FactureDto, visite: &VisiteDto) -> Result<Vec<u8>, PdfError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Facture {}", facture.n_facture),
        Mm(148.0),
        Mm(210.0),
        "Page 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PdfError(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PdfError(e.to_string()))?;

    // Header
    layer.use_text("OPTIQUE", 16.0, Mm(16.0), Mm(190.0), &bold);
    layer.use_text(
        format!("Kenitra, le {}", fmt_date_fr(&facture.date_facture)),
        9.0,
        Mm(88.0),
        Mm(192.0),
        &font,
    );
    layer.use_text(
        format!("Facture N°: {}", facture.n_facture),
        10.0,
        Mm(88.0),
        Mm(185.0),
        &bold,
    );

    // Client and doctor
    layer.use_text(
        format!("M: {}", visite.fullname),
        10.0,
        Mm(16.0),
        Mm(174.0),
        &bold,
    );
    layer.use_text(
        format!("Dr: {}", visite.doctor),
        10.0,
        Mm(88.0),
        Mm(174.0),
        &bold,
    );

    // Prescription (far vision)
    layer.use_text("Vision de Loin", 11.0, Mm(56.0), Mm(164.0), &bold);
    hline(&layer, 160.5, 16.0, 132.0);
    row(
        &layer,
        &bold,
        9.0,
        155.0,
        &[
            (18.0, "Oeil"),
            (46.0, "Sphère"),
            (76.0, "Cylindre"),
            (108.0, "Axe"),
        ],
    );
    hline(&layer, 152.0, 16.0, 132.0);

    let od_axis = fmt_amount(visite.od_axis.unwrap_or_default());
    let os_axis = fmt_amount(visite.os_axis.unwrap_or_default());
    row(
        &layer,
        &font,
        9.0,
        146.0,
        &[
            (18.0, "OD"),
            (46.0, visite.od_sphere.as_str()),
            (76.0, visite.od_cylinder.as_str()),
            (108.0, od_axis.as_str()),
        ],
    );
    row(
        &layer,
        &font,
        9.0,
        139.0,
        &[
            (18.0, "OG"),
            (46.0, visite.os_sphere.as_str()),
            (76.0, visite.os_cylinder.as_str()),
            (108.0, os_axis.as_str()),
        ],
    );
    hline(&layer, 135.5, 16.0, 132.0);

    // Addition
    layer.use_text("Addition", 10.0, Mm(16.0), Mm(127.0), &bold);
    layer.use_text(
        format!("Add: {}", fmt_amount(visite.addition.unwrap_or_default())),
        10.0,
        Mm(56.0),
        Mm(120.0),
        &bold,
    );

    // Billed lines
    layer.use_text("Montant", 11.0, Mm(60.0), Mm(110.0), &bold);
    hline(&layer, 106.5, 16.0, 132.0);
    row(
        &layer,
        &bold,
        9.0,
        101.0,
        &[(18.0, "Quantité"), (46.0, "Désignation"), (106.0, "Prix")],
    );
    hline(&layer, 98.0, 16.0, 132.0);

    let prix_monture = format!("{} DH", fmt_amount(visite.prixmonture.unwrap_or_default()));
    let prix_od = format!("{} DH", fmt_amount(visite.price_od.unwrap_or_default()));
    let prix_os = format!("{} DH", fmt_amount(visite.price_os.unwrap_or_default()));
    row(
        &layer,
        &font,
        9.0,
        92.0,
        &[
            (18.0, "1"),
            (46.0, "Monture"),
            (106.0, prix_monture.as_str()),
        ],
    );
    row(
        &layer,
        &font,
        9.0,
        85.0,
        &[
            (18.0, "VL"),
            (46.0, visite.verre_od.as_str()),
            (106.0, prix_od.as_str()),
        ],
    );
    row(
        &layer,
        &font,
        9.0,
        78.0,
        &[
            (18.0, "VP"),
            (46.0, visite.verre_os.as_str()),
            (106.0, prix_os.as_str()),
        ],
    );
    hline(&layer, 74.5, 16.0, 132.0);

    // Total
    let total = invoice_total(visite);
    layer.use_text(
        format!(
            "Montant en lettres: {} dirhams",
            amount_in_words_fr(total)
        ),
        8.0,
        Mm(16.0),
        Mm(66.0),
        &bold,
    );
    layer.use_text(
        format!("Total TTC: {} MAD", fmt_amount(total)),
        10.0,
        Mm(88.0),
        Mm(59.0),
        &bold,
    );

    // Signature
    boxed(&layer, 16.0, 38.0, 132.0, 52.0);
    layer.use_text("Signature et cachet", 9.0, Mm(56.0), Mm(44.0), &font);

    // Legal footer
    layer.use_text("INPE: 055016604", 7.0, Mm(56.0), Mm(20.0), &font);
    layer.use_text("ICE: 001979697000031", 7.0, Mm(52.0), Mm(16.0), &font);
    layer.use_text(
        "R.C: 66898 - Patente: 20600569 IF: 15237994 - CNSS: 4388725",
        7.0,
        Mm(26.0),
        Mm(12.0),
        &font,
    );

    doc.save_to_bytes().map_err(|e| PdfError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visite() -> VisiteDto {
        VisiteDto {
            id: Some("v-1".into()),
            fullname: "Amina Berrada".into(),
            telephone: "0612345678".into(),
            date_visite: "2024-04-02".into(),
            od_sphere: "-1.25".into(),
            od_cylinder: "-0.50".into(),
            od_axis: Some(90.0),
            os_sphere: "-1.00".into(),
            os_cylinder: "-0.75".into(),
            os_axis: Some(85.0),
            addition: Some(1.5),
            pd: "62".into(),
            verre_od: "Organique 1.5 AR".into(),
            verre_os: "Organique 1.5 AR".into(),
            price_od: Some(500.0),
            price_os: Some(500.0),
            prixmonture: Some(300.0),
            total: Some(1300.0),
            avance: Some(800.0),
            reste: Some(500.0),
            remise: Some(0.0),
            doctor: "Dr. El Fassi".into(),
        }
    }

    fn facture() -> FactureDto {
        FactureDto {
            id: Some("f-1".into()),
            n_facture: "384512".into(),
            date_facture: "2024-04-03".into(),
            visite_id: "v-1".into(),
        }
    }

    #[test]
    fn total_is_both_lenses_plus_frame() {
        assert_eq!(invoice_total(&visite()), 1300.0);
    }

    #[test]
    fn total_ignores_the_stored_running_figures() {
        let mut v = visite();
        v.total = Some(999.0);
        v.reste = Some(1.0);
        assert_eq!(invoice_total(&v), 1300.0);
    }

    #[test]
    fn amount_in_words_is_french() {
        assert_eq!(amount_in_words_fr(1300.0), "mille trois cents");
        assert_eq!(amount_in_words_fr(80.0), "quatre-vingts");
    }

    #[test]
    fn amounts_print_without_trailing_zeros_when_whole() {
        assert_eq!(fmt_amount(1300.0), "1300");
        assert_eq!(fmt_amount(99.5), "99.50");
    }

    #[test]
    fn dates_print_as_day_month_year() {
        assert_eq!(fmt_date_fr("2024-04-03"), "03/04/2024");
        assert_eq!(fmt_date_fr("garbage"), "garbage");
    }

    #[test]
    fn render_produces_a_pdf_document() {
        let bytes = render(&facture(), &visite()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }
}
