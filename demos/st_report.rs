use chrono::NaiveDate;
use icms_st::core::*;
use icms_st::mva::{is_special_ncm, resolve};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() {
    let mut invoice = InvoiceBuilder::new("000451")
        .issue_date(NaiveDate::from_ymd_opt(2024, 11, 4).unwrap())
        .emitter(Party::new("Distribuidora Sul Ltda", "12345678000190", "SP"))
        .recipient(Party::new("Mercado Central", "98765432000110", "PE"))
        .totals(DeclaredTotals {
            products: dec!(1450),
            invoice_total: dec!(1510),
            freight: dec!(60),
            other_expenses: Decimal::ZERO,
        })
        .add_product(
            ProductBuilder::new("Óleo de girassol 900ml", "12074090")
                .cfop("6102")
                .quantity(dec!(20), dec!(5))
                .declared_icms(dec!(12), dec!(12))
                .build(),
        )
        .add_product(
            ProductBuilder::new("Bomba d'água", "84133010")
                .cest("0100100")
                .cfop("6102")
                .quantity(dec!(2), dec!(400))
                .ipi(dec!(40))
                .declared_icms(dec!(12), dec!(96))
                .build(),
        )
        .add_product(
            ProductBuilder::new("Macarrão espaguete 500g", "19021100")
                .cest("1704900")
                .cfop("6102")
                .quantity(dec!(50), dec!(5))
                .declared_icms(dec!(12), dec!(30))
                .build(),
        )
        .add_product(
            ProductBuilder::new("Panettone gotas 400g", "19052010")
                .cest("1705200")
                .cfop("6403")
                .quantity(dec!(10), dec!(30))
                .declared_icms(dec!(12), dec!(36))
                .build(),
        )
        .build()
        .unwrap();

    // ── 1. Lint findings ──────────────────────────────────────────────
    println!("=== Lint ===");
    for finding in lint_products(&invoice.products) {
        println!("  {finding}");
    }

    // ── 2. Calculation blocked until origins are set ──────────────────
    println!("\n=== Calculation ===");
    if let Err(e) = invoice.calculate() {
        println!("  {e}");
    }
    for i in 0..invoice.products.len() {
        if is_special_ncm(&invoice.products[i].ncm) && invoice.products[i].origin.is_none() {
            let changed = invoice
                .set_origin(i, ProductOrigin::NaoSignatariaSulSudeste)
                .unwrap();
            println!("  origin set on {changed} product(s)");
        }
    }
    invoice.calculate().unwrap();

    // ── 3. Per-product results ────────────────────────────────────────
    println!("\n=== Products ===");
    for p in &invoice.products {
        let Some(st) = &p.st else { continue };
        println!(
            "  {:<26} {:<22} rule {:?}, MVA {}%, base {}, ST {}",
            p.name,
            p.segment,
            resolve(p).rule,
            st.mva_applied,
            st.base.round_dp(2),
            st.tax.round_dp(2),
        );
    }

    // ── 4. Totals ─────────────────────────────────────────────────────
    let totals = invoice.st_totals();
    println!("\n=== Totals ===");
    println!("  Gross value:    {}", totals.gross_value);
    println!("  Starting value: {}", totals.starting_value.round_dp(2));
    println!("  ST base:        {}", totals.st_base.round_dp(2));
    println!("  ST tax:         {}", totals.st_tax.round_dp(2));
    for (mva, tax) in &totals.tax_by_mva {
        println!("  ST at MVA {mva}%: {}", tax.round_dp(2));
    }
    for (cfop, gross) in &totals.gross_by_cfop {
        println!("  CFOP {cfop}: {gross}");
    }
}
