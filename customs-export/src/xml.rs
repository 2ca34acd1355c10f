use crate::{
    ExportError, ExportSettings,
    address::{Address, split_address},
    number::{AMOUNT_PLACES, MASS_PLACES, RATE_PLACES, fixed, trimmed},
};
use customs_core::models::{DeclarationExport, DocumentLine, GoodsLine, format_date};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Write;

/// Write the XML document for a declaration into `sink`.
///
/// The element layout is fixed. Values come from the bundle, except for the
/// declarant identity and the type codes, which come from `settings`.
pub fn write_declaration<W: Write>(
    bundle: &DeclarationExport,
    settings: &ExportSettings,
    sink: W,
) -> Result<(), ExportError> {
    let declaration = &bundle.declaration.data;
    if bundle.goods.is_empty() {
        return Err(ExportError::NoGoods(declaration.reference_number.clone()));
    }

    tracing::debug!(
        lrn = %declaration.reference_number,
        goods = bundle.goods.len(),
        documents = bundle.documents.len(),
        "rendering export declaration"
    );

    let mut doc = Document::new(sink, settings.indent);
    doc.prolog()?;
    doc.element("ExportDeclaration", |doc| {
        doc.element("ExportOperation", |doc| {
            doc.text("LRN", &declaration.reference_number)?;
            doc.text("MRN", &settings.mrn)?;
            doc.text("declarationType", &settings.declaration_type)?;
            doc.text(
                "additionalDeclarationType",
                &settings.additional_declaration_type,
            )?;
            doc.text("security", &settings.security)?;
            doc.text("validityDate", &format_date(declaration.validity_date)?)?;
            doc.text(
                "totalAmountInvoiced",
                &fixed(bundle.total_statistical_value(), AMOUNT_PLACES),
            )?;
            doc.text("invoiceCurrency", &bundle.currency.code)
        })?;

        doc.element("Exporter", |doc| {
            doc.optional(
                "identificationType",
                bundle.exporter.identification_type.as_deref(),
            )?;
            doc.optional(
                "identificationNumber",
                bundle.exporter.identification_number.as_deref(),
            )?;
            doc.text("name", &bundle.exporter.name)?;
            doc.address(&split_address(&bundle.exporter.address))
        })?;

        doc.element("Declarant", |doc| {
            doc.text(
                "identificationNumber",
                &settings.declarant.identification_number,
            )?;
            doc.text("name", &settings.declarant.name)?;
            doc.address(&split_address(&settings.declarant.address))
        })?;

        doc.element("CustomsOfficeOfExport", |doc| {
            doc.text("referenceNumber", &bundle.office_of_export.code)
        })?;
        doc.element("CustomsOfficeOfExit", |doc| {
            doc.text("referenceNumber", &bundle.office_of_exit.code)
        })?;

        doc.element("CurrencyExchange", |doc| {
            doc.text("internalCurrencyUnit", &bundle.currency.code)?;
            doc.text(
                "exchangeRate",
                &trimmed(declaration.exchange_rate, RATE_PLACES),
            )
        })?;

        doc.element("GoodsShipment", |doc| {
            doc.text("countryOfDestination", &bundle.destination.code)?;
            doc.element("DeliveryTerms", |doc| {
                doc.text("incotermCode", &bundle.incoterm.code)?;
                doc.text("location", &declaration.delivery_location)
            })?;

            doc.element("Consignment", |doc| {
                doc.text("modeOfTransportAtTheBorder", &bundle.transport_mode.code)?;
                doc.text(
                    "grossMass",
                    &trimmed(bundle.total_gross_mass(), MASS_PLACES),
                )?;

                doc.element("Consignee", |doc| {
                    doc.optional(
                        "identificationType",
                        bundle.consignee.identification_type.as_deref(),
                    )?;
                    doc.optional(
                        "identificationNumber",
                        bundle.consignee.identification_number.as_deref(),
                    )?;
                    doc.text("name", &bundle.consignee.name)?;
                    let mut address = split_address(&bundle.consignee.address);
                    address
                        .country
                        .get_or_insert_with(|| bundle.destination.code.clone());
                    doc.address(&address)
                })?;

                for line in bundle.goods.iter() {
                    doc.goods_item(line)?;
                }
                Ok(())
            })?;

            for (offset, line) in bundle.documents.iter().enumerate() {
                doc.supporting_document(offset + 1, line)?;
            }
            Ok(())
        })
    })?;

    Ok(())
}

/// Render the XML document for a declaration into a string.
pub fn to_xml_string(
    bundle: &DeclarationExport,
    settings: &ExportSettings,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_declaration(bundle, settings, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// The file name offered when the document is downloaded, derived from the
/// local reference number.
///
/// ```
/// # use customs_export::file_name;
/// # fn check(bundle: &customs_core::models::DeclarationExport) {
/// // "LRN 2025/001" becomes "declaration-LRN_2025_001.xml"
/// let name = file_name(bundle);
/// # }
/// ```
pub fn file_name(bundle: &DeclarationExport) -> String {
    let reference = bundle
        .declaration
        .data
        .reference_number
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>();
    format!("declaration-{reference}.xml")
}

/// Thin layer over the event writer for the element shapes the document uses.
struct Document<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> Document<W> {
    fn new(sink: W, indent: usize) -> Self {
        let writer = if indent == 0 {
            Writer::new(sink)
        } else {
            Writer::new_with_indent(sink, b' ', indent)
        };
        Self { writer }
    }

    fn prolog(&mut self) -> Result<(), ExportError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    /// An element whose children are written by `content`.
    fn element(
        &mut self,
        name: &str,
        content: impl FnOnce(&mut Self) -> Result<(), ExportError>,
    ) -> Result<(), ExportError> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        content(self)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// An element holding escaped text.
    fn text(&mut self, name: &str, value: &str) -> Result<(), ExportError> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        self.writer.write_event(Event::Text(BytesText::new(value)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// A text element that is left out entirely when there is no value.
    fn optional(&mut self, name: &str, value: Option<&str>) -> Result<(), ExportError> {
        match value {
            Some(value) => self.text(name, value),
            None => Ok(()),
        }
    }

    fn address(&mut self, address: &Address) -> Result<(), ExportError> {
        self.element("Address", |doc| {
            doc.optional("streetAndNumber", address.street_and_number.as_deref())?;
            doc.optional("postcode", address.postcode.as_deref())?;
            doc.optional("city", address.city.as_deref())?;
            doc.optional("country", address.country.as_deref())
        })
    }

    fn goods_item(&mut self, line: &GoodsLine) -> Result<(), ExportError> {
        let goods = &line.goods;
        self.element("GoodsItem", |doc| {
            doc.text(
                "declarationGoodsItemNumber",
                &goods.sequence_number.to_string(),
            )?;
            doc.text(
                "statisticalValue",
                &fixed(goods.statistical_value, AMOUNT_PLACES),
            )?;

            doc.element("Commodity", |doc| {
                doc.text("descriptionOfGoods", &goods.description)?;
                doc.element("CommodityCode", |doc| {
                    let (subheading, extension) = split_commodity_code(&line.harmonized_code.code);
                    doc.text("harmonizedSystemSubHeadingCode", subheading)?;
                    doc.optional("combinedNomenclatureCode", extension)
                })?;
                doc.element("GoodsMeasure", |doc| {
                    doc.text("grossMass", &trimmed(goods.gross_mass, MASS_PLACES))?;
                    doc.text("netMass", &trimmed(goods.net_mass, MASS_PLACES))
                })
            })?;

            // One packaging entry per goods line
            doc.element("Packaging", |doc| {
                doc.text("sequenceNumber", "1")?;
                doc.text("typeOfPackages", &line.package_type.code)?;
                doc.text("numberOfPackages", &goods.number_of_packages.to_string())?;
                doc.optional("shippingMarks", goods.shipping_marks.as_deref())
            })
        })
    }

    fn supporting_document(
        &mut self,
        sequence_number: usize,
        line: &DocumentLine,
    ) -> Result<(), ExportError> {
        self.element("SupportingDocument", |doc| {
            doc.text("sequenceNumber", &sequence_number.to_string())?;
            doc.text("type", &line.document_type.code)?;
            doc.text("referenceNumber", &line.document.reference_number)?;
            match line.document.issue_date {
                Some(date) => doc.text("issueDate", &format_date(date)?),
                None => Ok(()),
            }
        })
    }
}

/// Split a tariff code into the six-digit harmonized system subheading and
/// the two-digit combined nomenclature extension, if there is one.
fn split_commodity_code(code: &str) -> (&str, Option<&str>) {
    match (code.get(..6), code.get(6..8)) {
        (Some(subheading), Some(extension)) => (subheading, Some(extension)),
        (Some(subheading), None) => (subheading, None),
        _ => (code, None),
    }
}
