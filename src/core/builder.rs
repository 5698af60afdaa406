use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::IcmsStError;
use super::types::*;
use super::validation::lint_products;
use crate::segment::segment_for;
use crate::st::REGIME_NORMAL;

/// Upper bound on line items per document.
pub const MAX_PRODUCTS: usize = 10_000;

/// Builder for an [`Invoice`].
///
/// ```
/// use icms_st::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("4512")
///     .emitter(Party::new("Distribuidora Sul Ltda", "12345678000190", "SP"))
///     .recipient(Party::new("Mercado Central", "98765432000110", "PE"))
///     .add_product(
///         ProductBuilder::new("Pão de forma", "19059010")
///             .cfop("6102")
///             .gross_value(dec!(100))
///             .declared_icms(dec!(12), dec!(12))
///             .build(),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.products[0].tax_regime, "NORMAL");
/// ```
pub struct InvoiceBuilder {
    number: String,
    issue_date: Option<NaiveDate>,
    emitter: Party,
    recipient: Party,
    totals: DeclaredTotals,
    products: Vec<Product>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            issue_date: None,
            emitter: Party::default(),
            recipient: Party::default(),
            totals: DeclaredTotals::default(),
            products: Vec::new(),
        }
    }

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn emitter(mut self, party: Party) -> Self {
        self.emitter = party;
        self
    }

    pub fn recipient(mut self, party: Party) -> Self {
        self.recipient = party;
        self
    }

    pub fn totals(mut self, totals: DeclaredTotals) -> Self {
        self.totals = totals;
        self
    }

    pub fn add_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Build the invoice.
    ///
    /// Products are renumbered by position. Freight and other expenses
    /// declared only at document level are apportioned to the items that
    /// carry none, in proportion to their share of the declared products total.
    pub fn build(self) -> Result<Invoice, IcmsStError> {
        if self.number.trim().is_empty() {
            return Err(IcmsStError::Builder("invoice number is required".into()));
        }
        if self.products.len() > MAX_PRODUCTS {
            return Err(IcmsStError::Builder(format!(
                "invoice cannot have more than {MAX_PRODUCTS} products"
            )));
        }

        let mut products = self.products;
        for (i, product) in products.iter_mut().enumerate() {
            product.id = i;
        }
        apportion_document_charges(&mut products, &self.totals)?;

        Ok(Invoice {
            number: self.number,
            issue_date: self.issue_date,
            emitter: self.emitter,
            recipient: self.recipient,
            totals: self.totals,
            products,
        })
    }

    /// Build and reject the invoice if [`lint_products`] reports anything.
    pub fn build_strict(self) -> Result<Invoice, IcmsStError> {
        let invoice = self.build()?;
        let errors = lint_products(&invoice.products);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(IcmsStError::Validation(msg));
        }
        Ok(invoice)
    }
}

fn apportion_document_charges(
    products: &mut [Product],
    totals: &DeclaredTotals,
) -> Result<(), IcmsStError> {
    if totals.products <= Decimal::ZERO {
        return Ok(());
    }

    let share_of = |gross: Decimal, amount: Decimal| {
        gross
            .checked_mul(amount)
            .and_then(|v| v.checked_div(totals.products))
            .ok_or_else(|| IcmsStError::Builder("document charge apportionment overflow".into()))
    };

    for product in products.iter_mut() {
        if product.freight.is_zero() && totals.freight > Decimal::ZERO {
            product.freight = share_of(product.gross_value, totals.freight)?;
        }
        if product.other_expenses.is_zero() && totals.other_expenses > Decimal::ZERO {
            product.other_expenses = share_of(product.gross_value, totals.other_expenses)?;
        }
    }
    Ok(())
}

impl Party {
    pub fn new(name: impl Into<String>, cnpj: impl Into<String>, uf: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cnpj: cnpj.into(),
            uf: uf.into(),
        }
    }
}

/// Builder for a [`Product`].
///
/// The segment label is derived from the CEST at build time and the regime
/// marker defaults to `"NORMAL"`. When no gross value is given it is taken as
/// `quantity * unit_value`.
pub struct ProductBuilder {
    id: usize,
    code: String,
    name: String,
    ncm: String,
    cest: String,
    cfop: String,
    quantity: Decimal,
    unit_value: Decimal,
    gross_value: Option<Decimal>,
    ipi: Decimal,
    freight: Decimal,
    other_expenses: Decimal,
    discount: Decimal,
    tax_regime: String,
    icms: DeclaredIcms,
    origin: Option<ProductOrigin>,
}

impl ProductBuilder {
    pub fn new(name: impl Into<String>, ncm: impl Into<String>) -> Self {
        Self {
            id: 0,
            code: String::new(),
            name: name.into(),
            ncm: ncm.into(),
            cest: String::new(),
            cfop: String::new(),
            quantity: Decimal::ZERO,
            unit_value: Decimal::ZERO,
            gross_value: None,
            ipi: Decimal::ZERO,
            freight: Decimal::ZERO,
            other_expenses: Decimal::ZERO,
            discount: Decimal::ZERO,
            tax_regime: REGIME_NORMAL.to_string(),
            icms: DeclaredIcms::default(),
            origin: None,
        }
    }

    /// Position id for a standalone product. [`InvoiceBuilder::build`]
    /// overwrites it with the line's position in the document.
    pub fn id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn cest(mut self, cest: impl Into<String>) -> Self {
        self.cest = cest.into();
        self
    }

    pub fn cfop(mut self, cfop: impl Into<String>) -> Self {
        self.cfop = cfop.into();
        self
    }

    pub fn quantity(mut self, quantity: Decimal, unit_value: Decimal) -> Self {
        self.quantity = quantity;
        self.unit_value = unit_value;
        self
    }

    pub fn gross_value(mut self, value: Decimal) -> Self {
        self.gross_value = Some(value);
        self
    }

    pub fn ipi(mut self, amount: Decimal) -> Self {
        self.ipi = amount;
        self
    }

    pub fn freight(mut self, amount: Decimal) -> Self {
        self.freight = amount;
        self
    }

    pub fn other_expenses(mut self, amount: Decimal) -> Self {
        self.other_expenses = amount;
        self
    }

    pub fn discount(mut self, amount: Decimal) -> Self {
        self.discount = amount;
        self
    }

    pub fn tax_regime(mut self, regime: impl Into<String>) -> Self {
        self.tax_regime = regime.into();
        self
    }

    pub fn icms(mut self, icms: DeclaredIcms) -> Self {
        self.icms = icms;
        self
    }

    /// Shortcut for the declared rate and amount, leaving CST and base empty.
    pub fn declared_icms(mut self, rate: Decimal, amount: Decimal) -> Self {
        self.icms.rate = rate;
        self.icms.amount = amount;
        self
    }

    pub fn origin(mut self, origin: ProductOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn build(self) -> Product {
        let gross_value = self
            .gross_value
            .unwrap_or_else(|| self.quantity.checked_mul(self.unit_value).unwrap_or_default());
        Product {
            id: self.id,
            code: self.code,
            segment: segment_for(&self.cest).to_string(),
            name: self.name,
            ncm: self.ncm,
            cest: self.cest,
            cfop: self.cfop,
            quantity: self.quantity,
            unit_value: self.unit_value,
            gross_value,
            ipi: self.ipi,
            freight: self.freight,
            other_expenses: self.other_expenses,
            discount: self.discount,
            tax_regime: self.tax_regime,
            icms: self.icms,
            origin: self.origin,
            st: None,
        }
    }
}
