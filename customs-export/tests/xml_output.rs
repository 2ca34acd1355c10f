use customs_core::models::*;
use customs_export::{Declarant, ExportError, ExportSettings, file_name, to_xml_string};
use rstest::*;
use time::macros::date;

fn goods_line(id: i64, goods: Goods, code: &str, package: &str) -> GoodsLine {
    GoodsLine {
        id: GoodsId(id),
        goods,
        harmonized_code: HarmonizedCode {
            code: code.into(),
            description: "tariff heading".into(),
        },
        package_type: PackageType {
            code: package.into(),
            description: "package".into(),
        },
    }
}

#[fixture]
fn bundle() -> DeclarationExport {
    let declaration = Declaration {
        reference_number: "LRN-2025-001".into(),
        validity_date: date!(2025 - 03 - 01),
        exporter_id: ExporterId(1),
        consignee_id: ConsigneeId(1),
        destination_country_id: CountryId(2),
        incoterm_id: IncotermId(1),
        delivery_location: "Poti Port".into(),
        currency_id: CurrencyId(1),
        exchange_rate: 2.7123,
        office_of_export_id: CustomsOfficeId(1),
        office_of_exit_id: CustomsOfficeId(2),
        transport_mode_id: TransportModeId(1),
    };

    let hazelnuts = Goods {
        sequence_number: 1,
        description: "Dried hazelnuts".into(),
        harmonized_code_id: HarmonizedCodeId(1),
        package_type_id: PackageTypeId(1),
        number_of_packages: 40,
        shipping_marks: Some("HZ-1/40".into()),
        gross_mass: 1025.5,
        net_mass: 1000.0,
        statistical_value: 8500.0,
    };
    let wine = Goods {
        sequence_number: 2,
        description: "Wine & brandy <samples>".into(),
        harmonized_code_id: HarmonizedCodeId(2),
        package_type_id: PackageTypeId(2),
        number_of_packages: 5,
        shipping_marks: None,
        gross_mass: 60.25,
        net_mass: 54.0,
        statistical_value: 1200.5,
    };

    DeclarationExport {
        declaration: Record::new(DeclarationId(1), declaration),
        exporter: Exporter {
            name: "Caucasus Trading LLC".into(),
            address: "12 Rustaveli Ave, Tbilisi, 0108, GE".into(),
            identification_type: Some("TIN".into()),
            identification_number: Some("404123456".into()),
        },
        consignee: Consignee {
            name: "Hanse Import GmbH".into(),
            address: "Hafenstrasse 5, Hamburg, 20457".into(),
            identification_type: None,
            identification_number: None,
        },
        destination: Country {
            code: "DE".into(),
            name: "Germany".into(),
        },
        incoterm: Incoterm {
            code: "FCA".into(),
            description: "Free Carrier".into(),
        },
        currency: Currency {
            code: "USD".into(),
            name: "US Dollar".into(),
        },
        office_of_export: CustomsOffice {
            code: "GE000101".into(),
            name: "Tbilisi Central".into(),
        },
        office_of_exit: CustomsOffice {
            code: "GE000202".into(),
            name: "Poti Port".into(),
        },
        transport_mode: TransportMode {
            code: "1".into(),
            description: "Maritime".into(),
        },
        goods: vec![
            goods_line(10, hazelnuts, "0802220000", "BG"),
            goods_line(11, wine, "220421", "CT"),
        ],
        documents: vec![
            DocumentLine {
                id: SupportingDocumentId(5),
                document: SupportingDocument {
                    document_type_id: DocumentTypeId(1),
                    reference_number: "INV-77".into(),
                    issue_date: Some(date!(2025 - 02 - 20)),
                },
                document_type: DocumentType {
                    code: "N935".into(),
                    description: "Invoice".into(),
                },
            },
            DocumentLine {
                id: SupportingDocumentId(6),
                document: SupportingDocument {
                    document_type_id: DocumentTypeId(2),
                    reference_number: "BL-1234".into(),
                    issue_date: None,
                },
                document_type: DocumentType {
                    code: "N705".into(),
                    description: "Bill of lading".into(),
                },
            },
        ],
    }
}

#[fixture]
fn compact() -> ExportSettings {
    ExportSettings {
        indent: 0,
        ..ExportSettings::default()
    }
}

#[rstest]
fn renders_full_document(bundle: DeclarationExport, compact: ExportSettings) {
    let expected = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "<ExportDeclaration>",
        "<ExportOperation>",
        "<LRN>LRN-2025-001</LRN>",
        "<MRN>00XX00000000000000</MRN>",
        "<declarationType>EX</declarationType>",
        "<additionalDeclarationType>A</additionalDeclarationType>",
        "<security>0</security>",
        "<validityDate>2025-03-01</validityDate>",
        "<totalAmountInvoiced>9700.50</totalAmountInvoiced>",
        "<invoiceCurrency>USD</invoiceCurrency>",
        "</ExportOperation>",
        "<Exporter>",
        "<identificationType>TIN</identificationType>",
        "<identificationNumber>404123456</identificationNumber>",
        "<name>Caucasus Trading LLC</name>",
        "<Address>",
        "<streetAndNumber>12 Rustaveli Ave</streetAndNumber>",
        "<postcode>0108</postcode>",
        "<city>Tbilisi</city>",
        "<country>GE</country>",
        "</Address>",
        "</Exporter>",
        "<Declarant>",
        "<identificationNumber>XX000000000000</identificationNumber>",
        "<name>Customs Declarant</name>",
        "<Address>",
        "<streetAndNumber>1 Customs Square</streetAndNumber>",
        "<postcode>00000</postcode>",
        "<city>Capital City</city>",
        "<country>XX</country>",
        "</Address>",
        "</Declarant>",
        "<CustomsOfficeOfExport><referenceNumber>GE000101</referenceNumber></CustomsOfficeOfExport>",
        "<CustomsOfficeOfExit><referenceNumber>GE000202</referenceNumber></CustomsOfficeOfExit>",
        "<CurrencyExchange>",
        "<internalCurrencyUnit>USD</internalCurrencyUnit>",
        "<exchangeRate>2.7123</exchangeRate>",
        "</CurrencyExchange>",
        "<GoodsShipment>",
        "<countryOfDestination>DE</countryOfDestination>",
        "<DeliveryTerms><incotermCode>FCA</incotermCode><location>Poti Port</location></DeliveryTerms>",
        "<Consignment>",
        "<modeOfTransportAtTheBorder>1</modeOfTransportAtTheBorder>",
        "<grossMass>1085.75</grossMass>",
        "<Consignee>",
        "<name>Hanse Import GmbH</name>",
        "<Address>",
        "<streetAndNumber>Hafenstrasse 5</streetAndNumber>",
        "<postcode>20457</postcode>",
        "<city>Hamburg</city>",
        "<country>DE</country>",
        "</Address>",
        "</Consignee>",
        "<GoodsItem>",
        "<declarationGoodsItemNumber>1</declarationGoodsItemNumber>",
        "<statisticalValue>8500.00</statisticalValue>",
        "<Commodity>",
        "<descriptionOfGoods>Dried hazelnuts</descriptionOfGoods>",
        "<CommodityCode>",
        "<harmonizedSystemSubHeadingCode>080222</harmonizedSystemSubHeadingCode>",
        "<combinedNomenclatureCode>00</combinedNomenclatureCode>",
        "</CommodityCode>",
        "<GoodsMeasure><grossMass>1025.5</grossMass><netMass>1000</netMass></GoodsMeasure>",
        "</Commodity>",
        "<Packaging>",
        "<sequenceNumber>1</sequenceNumber>",
        "<typeOfPackages>BG</typeOfPackages>",
        "<numberOfPackages>40</numberOfPackages>",
        "<shippingMarks>HZ-1/40</shippingMarks>",
        "</Packaging>",
        "</GoodsItem>",
        "<GoodsItem>",
        "<declarationGoodsItemNumber>2</declarationGoodsItemNumber>",
        "<statisticalValue>1200.50</statisticalValue>",
        "<Commodity>",
        "<descriptionOfGoods>Wine &amp; brandy &lt;samples&gt;</descriptionOfGoods>",
        "<CommodityCode>",
        "<harmonizedSystemSubHeadingCode>220421</harmonizedSystemSubHeadingCode>",
        "</CommodityCode>",
        "<GoodsMeasure><grossMass>60.25</grossMass><netMass>54</netMass></GoodsMeasure>",
        "</Commodity>",
        "<Packaging>",
        "<sequenceNumber>1</sequenceNumber>",
        "<typeOfPackages>CT</typeOfPackages>",
        "<numberOfPackages>5</numberOfPackages>",
        "</Packaging>",
        "</GoodsItem>",
        "</Consignment>",
        "<SupportingDocument>",
        "<sequenceNumber>1</sequenceNumber>",
        "<type>N935</type>",
        "<referenceNumber>INV-77</referenceNumber>",
        "<issueDate>2025-02-20</issueDate>",
        "</SupportingDocument>",
        "<SupportingDocument>",
        "<sequenceNumber>2</sequenceNumber>",
        "<type>N705</type>",
        "<referenceNumber>BL-1234</referenceNumber>",
        "</SupportingDocument>",
        "</GoodsShipment>",
        "</ExportDeclaration>",
    );

    let xml = to_xml_string(&bundle, &compact).unwrap();
    assert_eq!(xml, expected);
}

#[rstest]
fn consignee_country_from_address_wins(mut bundle: DeclarationExport, compact: ExportSettings) {
    bundle.consignee.address = "Rue du Port 3, Marseille, 13002, FR".into();
    let xml = to_xml_string(&bundle, &compact).unwrap();
    assert!(xml.contains(
        "<Consignee><name>Hanse Import GmbH</name><Address><streetAndNumber>Rue du Port 3</streetAndNumber><postcode>13002</postcode><city>Marseille</city><country>FR</country></Address></Consignee>"
    ));
}

#[rstest]
fn declarant_comes_from_settings(bundle: DeclarationExport, compact: ExportSettings) {
    let settings = ExportSettings {
        mrn: "25GE0000000000001".into(),
        declarant: Declarant {
            identification_number: "GE404000111".into(),
            name: "Broker LLC".into(),
            address: "3 Station Sq, Tbilisi, 0112, GE".into(),
        },
        ..compact
    };
    let xml = to_xml_string(&bundle, &settings).unwrap();
    assert!(xml.contains("<MRN>25GE0000000000001</MRN>"));
    assert!(xml.contains(
        "<Declarant><identificationNumber>GE404000111</identificationNumber><name>Broker LLC</name>"
    ));
}

#[rstest]
fn indented_output(bundle: DeclarationExport) {
    let xml = to_xml_string(&bundle, &ExportSettings::default()).unwrap();
    assert!(xml.contains("\n  <ExportOperation>\n    <LRN>LRN-2025-001</LRN>\n"));
    assert!(xml.ends_with("</ExportDeclaration>"));
}

#[rstest]
fn no_goods_is_an_error(mut bundle: DeclarationExport, compact: ExportSettings) {
    bundle.goods.clear();
    let error = to_xml_string(&bundle, &compact).unwrap_err();
    assert!(matches!(error, ExportError::NoGoods(ref lrn) if lrn == "LRN-2025-001"));
}

#[rstest]
fn no_documents_leaves_shipment_without_them(
    mut bundle: DeclarationExport,
    compact: ExportSettings,
) {
    bundle.documents.clear();
    let xml = to_xml_string(&bundle, &compact).unwrap();
    assert!(!xml.contains("SupportingDocument"));
    assert!(xml.contains("</Consignment></GoodsShipment>"));
}

#[rstest]
#[case("LRN-2025-001", "declaration-LRN-2025-001.xml")]
#[case("LRN 2025/001", "declaration-LRN_2025_001.xml")]
fn download_names(mut bundle: DeclarationExport, #[case] lrn: &str, #[case] expected: &str) {
    bundle.declaration.data.reference_number = lrn.into();
    assert_eq!(file_name(&bundle), expected);
}
