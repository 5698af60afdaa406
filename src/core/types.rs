use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// NF-e document (`infNFe`) reduced to what the ST engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// `ide/nNF`: invoice number.
    pub number: String,
    /// `ide/dhEmi`: issue date, when known.
    pub issue_date: Option<NaiveDate>,
    /// `emit`: issuer.
    pub emitter: Party,
    /// `dest`: recipient.
    pub recipient: Party,
    /// `total/ICMSTot`: document-level totals as declared.
    pub totals: DeclaredTotals,
    /// `det`: line items, in document order.
    pub products: Vec<Product>,
}

/// Issuer or recipient of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    /// `xNome`.
    pub name: String,
    /// `CNPJ`, digits only as given by the document.
    pub cnpj: String,
    /// `UF`: two-letter state code.
    pub uf: String,
}

/// Document totals declared in `ICMSTot`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclaredTotals {
    /// `vProd`: sum of product values.
    pub products: Decimal,
    /// `vNF`: invoice total.
    pub invoice_total: Decimal,
    /// `vFrete`: freight.
    pub freight: Decimal,
    /// `vOutro`: other expenses.
    pub other_expenses: Decimal,
}

/// One invoice line item (`det`).
///
/// Built once per line by the caller, then mutated in place: the origin and
/// the regime marker are user-editable and `st` is filled by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Position of the line within the document.
    pub id: usize,
    /// `cProd`: seller's item code.
    pub code: String,
    /// `xProd`: item description.
    pub name: String,
    /// `NCM`: 8-digit classification code, kept as raw text.
    pub ncm: String,
    /// `CEST`: 7-digit tax-substitution specifier, or empty.
    pub cest: String,
    /// `CFOP`: transaction purpose code.
    pub cfop: String,
    /// `qCom`.
    pub quantity: Decimal,
    /// `vUnCom`.
    pub unit_value: Decimal,
    /// `vProd`: gross product value.
    pub gross_value: Decimal,
    /// `vIPI`: excise tax.
    pub ipi: Decimal,
    /// `vFrete`: freight.
    pub freight: Decimal,
    /// `vOutro`: other expenses.
    pub other_expenses: Decimal,
    /// `vDesc`: discount.
    pub discount: Decimal,
    /// Market segment label derived from the CEST prefix.
    pub segment: String,
    /// Tax regime marker. Only `"NORMAL"` (any case) has meaning to the engine.
    pub tax_regime: String,
    /// Declared ICMS group of the line.
    pub icms: DeclaredIcms,
    /// Commercial origin, required only for the special food NCMs.
    pub origin: Option<ProductOrigin>,
    /// Result of the last ST calculation, if any.
    pub st: Option<CalculationResult>,
}

impl Product {
    /// Value the ST base is built from:
    /// `gross + excise + freight + other expenses - discount`.
    ///
    /// Not floored; a discount larger than the rest yields a negative value.
    /// Zero when the sum overflows, matching what the calculator uses.
    pub fn starting_value(&self) -> Decimal {
        self.checked_starting_value().unwrap_or(Decimal::ZERO)
    }

    /// [`Product::starting_value`], or `None` on overflow.
    pub fn checked_starting_value(&self) -> Option<Decimal> {
        self.gross_value
            .checked_add(self.ipi)?
            .checked_add(self.freight)?
            .checked_add(self.other_expenses)?
            .checked_sub(self.discount)
    }

    /// Whether the calculator has already run on this product.
    pub fn is_calculated(&self) -> bool {
        self.st.is_some()
    }
}

/// Declared ICMS sub-record (`imposto/ICMS/ICMSxx`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredIcms {
    /// `CST` / `CSOSN`: tax situation code.
    pub cst: String,
    /// `vBC`: declared base.
    pub base: Decimal,
    /// `pICMS`: declared rate, in percent.
    pub rate: Decimal,
    /// `vICMS`: declared tax amount.
    pub amount: Decimal,
}

/// Commercial origin of goods covered by the food-products MVA rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductOrigin {
    /// State signatory of the protocol.
    Signataria,
    /// Non-signatory state in the South or Southeast regions.
    NaoSignatariaSulSudeste,
    /// Non-signatory state in any other region.
    NaoSignatariaOutros,
    /// Imported goods.
    Exterior,
}

impl ProductOrigin {
    /// All categories, in display order.
    pub const ALL: [ProductOrigin; 4] = [
        Self::Signataria,
        Self::NaoSignatariaSulSudeste,
        Self::NaoSignatariaOutros,
        Self::Exterior,
    ];

    /// Stable code, identical to the serde representation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Signataria => "signataria",
            Self::NaoSignatariaSulSudeste => "nao_signataria_sul_sudeste",
            Self::NaoSignatariaOutros => "nao_signataria_outros",
            Self::Exterior => "exterior",
        }
    }

    /// Parse from the stable code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "signataria" => Some(Self::Signataria),
            "nao_signataria_sul_sudeste" => Some(Self::NaoSignatariaSulSudeste),
            "nao_signataria_outros" => Some(Self::NaoSignatariaOutros),
            "exterior" => Some(Self::Exterior),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Signataria => "Signatária do Prot. 46/2000",
            Self::NaoSignatariaSulSudeste => "Não Signatária (Sul/Sudeste)",
            Self::NaoSignatariaOutros => "Não Signatária (Outras)",
            Self::Exterior => "Exterior",
        }
    }
}

/// Output of one ST calculation, merged into [`Product::st`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Computed ST base, floored at zero.
    pub base: Decimal,
    /// Computed ST tax, floored at zero.
    pub tax: Decimal,
    /// MVA percentage actually applied.
    pub mva_applied: Decimal,
    /// Internal ICMS rate actually applied, in percent.
    pub internal_rate_applied: Decimal,
    /// The panettone exception forced MVA and internal rate.
    pub panettone_exception: bool,
    /// The gross-up formula was used instead of the MVA markup.
    pub gross_up: bool,
}
