// ABOUTME: Static template catalog for all supported legal document types
// ABOUTME: Provides lookup by kind, route-parameter resolution, and substring search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # Template Catalog
//!
//! Read-only catalog of the ten supported document templates, with bilingual
//! labels, pricing, input field descriptors, and legal-requirements
//! checklists. The table is built once on first access and never mutated.

use std::sync::LazyLock;

use crate::models::{DocumentField, DocumentInfo, DocumentKind, DocumentTemplate, FieldKind};

static TEMPLATES: LazyLock<[DocumentTemplate; 10]> = LazyLock::new(build_templates);

/// All templates, in catalog display order
#[must_use]
pub fn all() -> &'static [DocumentTemplate] {
    TEMPLATES.as_slice()
}

/// Look up the template for a document kind. Total: every kind has exactly
/// one template.
#[must_use]
pub fn template(kind: DocumentKind) -> &'static DocumentTemplate {
    &TEMPLATES[kind.index()]
}

/// Resolve a decoded route parameter to a template, case-insensitively.
///
/// Returns `None` for unrecognized strings; callers surface this as a
/// "not found" display state.
#[must_use]
pub fn find(param: &str) -> Option<&'static DocumentTemplate> {
    param.parse::<DocumentKind>().ok().map(template)
}

/// Case-insensitive substring filter across the English title, Marathi
/// label, and description. No ranking, no pagination; all matches are
/// returned in catalog order. An empty query matches everything.
#[must_use]
pub fn search(query: &str) -> Vec<&'static DocumentTemplate> {
    let needle = query.trim().to_lowercase();
    all()
        .iter()
        .filter(|t| {
            t.kind.title().to_lowercase().contains(&needle)
                || t.marathi_label.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}

fn info(marathi_definition: &str, english_definition: &str, requirements: &[&str]) -> DocumentInfo {
    DocumentInfo {
        marathi_definition: marathi_definition.to_owned(),
        english_definition: english_definition.to_owned(),
        requirements: requirements.iter().map(|&r| r.to_owned()).collect(),
    }
}

#[allow(clippy::too_many_lines)] // Data table: one entry per document type
fn build_templates() -> [DocumentTemplate; 10] {
    [
        DocumentTemplate {
            kind: DocumentKind::SaleDeed,
            marathi_label: "विक्री खत (Sale Deed)".to_owned(),
            description: "Transfer ownership of property from a seller to a buyer.".to_owned(),
            marathi_description: "विक्रेत्याकडून खरेदीदाराकडे मालमत्तेची मालकी हस्तांतरित करा."
                .to_owned(),
            price: 49.99,
            fields: vec![
                DocumentField::required("sellerName", "Seller Name", FieldKind::Text),
                DocumentField::required("buyerName", "Buyer Name", FieldKind::Text),
                DocumentField::required("propertyAddress", "Property Address", FieldKind::Textarea),
                DocumentField::required("saleConsideration", "Sale Price", FieldKind::Number),
                DocumentField::required("paymentMode", "Payment Mode", FieldKind::Text)
                    .with_placeholder("e.g., Cheque No. 123"),
            ],
            info: info(
                "विक्री खत हा एक कायदेशीर दस्तऐवज आहे जो एका व्यक्तीकडून (विक्रेता) दुसऱ्या व्यक्तीकडे (खरेदीदार) मालमत्तेची मालकी हस्तांतरित करतो. हे जमिनीच्या किंवा घराच्या पूर्ण मालकीचे पुरावे मानले जाते.",
                "A Sale Deed is a legal instrument that transfers the ownership of property from a seller to a buyer. It is the primary document used to prove ownership of a property.",
                &[
                    "7/12 Extract (Satbara Utara) or Property Card / ७/१२ उतारा किंवा प्रॉपर्टी कार्ड",
                    "Previous Deeds (Chain of documents) / पूर्वीचे दस्तऐवज",
                    "PAN Card of Buyer and Seller / पॅन कार्ड (खरेदीदार आणि विक्रेता)",
                    "Aadhaar Card / आधार कार्ड",
                    "Two Witnesses with ID Proof / दोन साक्षीदार (ओळखपत्रासह)",
                    "Property Tax Receipt / मालमत्ता कर पावती",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::GiftDeed,
            marathi_label: "बक्षीस पत्र (Gift Deed)".to_owned(),
            description: "Voluntarily transfer property to another person without consideration."
                .to_owned(),
            marathi_description:
                "कोणत्याही मोबदल्याशिवाय मालमत्ता दुसऱ्या व्यक्तीला स्वेच्छेने हस्तांतरित करा.".to_owned(),
            price: 29.99,
            fields: vec![
                DocumentField::required("donorName", "Donor Name", FieldKind::Text),
                DocumentField::required("doneeName", "Donee Name", FieldKind::Text),
                DocumentField::required("relationship", "Relationship", FieldKind::Text),
                DocumentField::required("propertyDetails", "Property Details", FieldKind::Textarea),
            ],
            info: info(
                "बक्षीस पत्र हे एक दस्तऐवज आहे ज्याद्वारे एक व्यक्ती आपली मालमत्ता दुसऱ्या व्यक्तीला प्रेमाने किंवा नात्यामुळे विनामूल्य (कोणत्याही मोबदल्याशिवाय) देते.",
                "A Gift Deed is a legal document used to voluntarily transfer ownership of property from the donor to the donee without any monetary consideration.",
                &[
                    "Property Card or 7/12 Extract / प्रॉपर्टी कार्ड किंवा ७/१२ उतारा",
                    "ID Proof of Donor and Donee / डोनर आणि डोनीचे ओळखपत्र",
                    "Property Valuation Report / मालमत्ता मूल्यांकन अहवाल",
                    "Stamp Duty Payment Receipt / मुद्रांक शुल्क पावती",
                    "Two Witnesses / दोन साक्षीदार",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::Will,
            marathi_label: "मृत्युपत्र (Will)".to_owned(),
            description: "Legal declaration of a person's wishes regarding the disposal of their property after death.".to_owned(),
            marathi_description:
                "मृत्यूनंतर मालमत्तेची विल्हेवाट लावण्याबाबत व्यक्तीच्या इच्छेचे कायदेशीर घोषणापत्र.".to_owned(),
            price: 39.99,
            fields: vec![
                DocumentField::required("testatorName", "Testator Name", FieldKind::Text),
                DocumentField::required(
                    "beneficiaries",
                    "Beneficiaries (Names & Relationship)",
                    FieldKind::Textarea,
                ),
                DocumentField::required("executorName", "Executor Name", FieldKind::Text),
                DocumentField::required("assets", "List of Assets", FieldKind::Textarea),
            ],
            info: info(
                "मृत्युपत्र (Will) म्हणजे एक कायदेशीर दस्तऐवज आहे, ज्यामध्ये व्यक्ती (टेस्टेटर) आपल्या संपत्तीचे वितरण त्याच्या मरणानंतर कसे होईल, हे स्पष्टपणे नमूद करते. यामध्ये त्याची इच्छाशक्ति आणि कोणते व्यक्ती किंवा संस्था त्याची संपत्ती प्राप्त करतील, हे सांगितले जाते.",
                "A will is a legal document in which a person (the testator) specifies how their assets should be distributed after their death. It reflects their wishes and outlines who will receive what portion of their estate.",
                &[
                    "Doctor's Certificate of Mental Fitness / मानसिक तंदुरुस्तीचे डॉक्टरांचे प्रमाणपत्र",
                    "List of Assets / संपत्तीची यादी",
                    "Details of Beneficiaries / वारसदारांची माहिती",
                    "Two Witnesses (Not Beneficiaries) / दोन साक्षीदार (जे वारसदार नसावेत)",
                    "Aadhaar Card of Testator / टेस्टेटरचे आधार कार्ड",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::PowerOfAttorney,
            marathi_label: "कुलमुखत्यारपत्र (Power of Attorney)".to_owned(),
            description: "Authorize someone to represent you or act on your behalf.".to_owned(),
            marathi_description:
                "तुमच्या वतीने प्रतिनिधित्व करण्यासाठी किंवा कार्य करण्यासाठी एखाद्याला अधिकार द्या.".to_owned(),
            price: 34.99,
            fields: vec![
                DocumentField::required("principalName", "Principal Name", FieldKind::Text),
                DocumentField::required("agentName", "Agent/Attorney Name", FieldKind::Text),
                DocumentField::required("purpose", "Purpose/Powers Granted", FieldKind::Textarea),
            ],
            info: info(
                "कुलमुखत्यारपत्र हा एक दस्तऐवज आहे जो एका व्यक्तीला (प्रिन्सिपल) दुसऱ्या व्यक्तीला (एजंट) त्यांच्या वतीने कायदेशीर निर्णय घेण्याचे किंवा कार्य करण्याचे अधिकार देतो.",
                "Power of Attorney (POA) is a legal document giving one person (the agent) the power to act for another person (the principal). It can be general or specific.",
                &[
                    "Identity Proof of Principal and Agent / प्रिन्सिपल आणि एजंटचे ओळखपत्र",
                    "Address Proof / पत्त्याचा पुरावा",
                    "Passport size photos / पासपोर्ट आकाराचे फोटो",
                    "Specific details of powers to be granted / अधिकारांचा स्पष्ट तपशील",
                    "Two Witnesses / दोन साक्षीदार",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::LeaseAgreement,
            marathi_label: "भाडे करार (Lease Agreement)".to_owned(),
            description: "Contract outlining the terms under which one party agrees to rent property owned by another.".to_owned(),
            marathi_description:
                "मालमत्ता भाड्याने देण्यासाठी आणि घेण्यासाठी मालक आणि भाडेकरू यांच्यातील करार.".to_owned(),
            price: 24.99,
            fields: vec![
                DocumentField::required("landlordName", "Landlord Name", FieldKind::Text),
                DocumentField::required("tenantName", "Tenant Name", FieldKind::Text),
                DocumentField::required("propertyAddress", "Premises Address", FieldKind::Textarea),
                DocumentField::required("rentAmount", "Monthly Rent", FieldKind::Number),
                DocumentField::required("leaseDuration", "Duration (Months)", FieldKind::Number),
            ],
            info: info(
                "भाडे करार हा जमीनदार आणि भाडेकरू यांच्यातील कायदेशीर करार आहे, ज्यामध्ये मालमत्ता वापरण्याचे नियम, भाडे आणि कालावधी निश्चित केला जातो. ११ महिन्यांपेक्षा जास्त कालावधीसाठी हा करार नोंदणीकृत (Registered) करणे आवश्यक आहे.",
                "A Lease Agreement is a contract between a landlord and a tenant that outlines the terms of renting a property. It specifies rent amount, duration, and rules of occupancy.",
                &[
                    "Ownership Proof (Index II or Electricity Bill) / मालकी हक्काचा पुरावा (इंडेक्स २ किंवा वीज बिल)",
                    "Aadhaar Card & PAN of Landlord & Tenant / घरमालक आणि भाडेकरूचे आधार आणि पॅन कार्ड",
                    "Two Witnesses with ID / दोन साक्षीदार",
                    "Passport size photos / पासपोर्ट आकाराचे फोटो",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::MortgageAgreement,
            marathi_label: "गहाण खत (Mortgage Deed)".to_owned(),
            description: "Secure a loan with real property collateral.".to_owned(),
            marathi_description: "स्थावर मालमत्तेच्या तारणावर कर्ज सुरक्षित करा.".to_owned(),
            price: 55.00,
            fields: vec![
                DocumentField::required("borrower", "Borrower Name", FieldKind::Text),
                DocumentField::required("lender", "Lender Name", FieldKind::Text),
                DocumentField::required("amount", "Loan Amount", FieldKind::Number),
                DocumentField::required("property", "Property Details", FieldKind::Textarea),
            ],
            info: info(
                "गहाण खत म्हणजे जेव्हा एखादी व्यक्ती कर्जाच्या बदल्यात आपली स्थावर मालमत्ता बँकेकडे किंवा सावकाराकडे सुरक्षा म्हणून ठेवते तेव्हा केला जाणारा करार.",
                "A Mortgage Deed is a legal document used by a borrower to pledge their property to a lender as security for a loan.",
                &[
                    "Title Deeds of the Property / मालमत्तेचे मूळ दस्तऐवज",
                    "7/12 Extract or Property Card / ७/१२ उतारा किंवा प्रॉपर्टी कार्ड",
                    "Loan Sanction Letter / कर्ज मंजुरी पत्र",
                    "ID Proofs of Borrower and Lender / कर्जदार आणि सावकाराचे ओळखपत्र",
                    "Two Witnesses / दोन साक्षीदार",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::Affidavit,
            marathi_label: "प्रतिज्ञापत्र (Affidavit)".to_owned(),
            description: "A written statement confirmed by oath or affirmation.".to_owned(),
            marathi_description: "शपथेवर किंवा प्रतिज्ञेवर पुष्टी केलेले लिखित विधान.".to_owned(),
            price: 15.00,
            fields: vec![
                DocumentField::required("deponent", "Deponent Name", FieldKind::Text),
                DocumentField::required("statement", "Statement of Fact", FieldKind::Textarea),
                DocumentField::required("purpose", "Purpose of Affidavit", FieldKind::Text),
            ],
            info: info(
                "प्रतिज्ञापत्र हे सत्यतेचे लिखित विधान आहे, ज्यावर शपथ घेऊन स्वाक्षरी केली जाते. याचा वापर न्यायालयात किंवा सरकारी कामात पुरावा म्हणून केला जातो.",
                "An affidavit is a sworn statement of fact written down and signed under oath. It is used as evidence in courts and for various government applications.",
                &[
                    "Non-Judicial Stamp Paper (Usually ₹100 or ₹500) / नॉन-ज्युडिशियल स्टॅम्प पेपर",
                    "Aadhaar Card / आधार कार्ड",
                    "Specific details of the declaration / घोषणेचा तपशील",
                    "Notary verification / नोटरी सत्यापन",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::PartnershipAgreement,
            marathi_label: "भागीदारी करार (Partnership Deed)".to_owned(),
            description: "Agreement between two or more partners to run a business together."
                .to_owned(),
            marathi_description: "एकत्र व्यवसाय चालवण्यासाठी दोन किंवा अधिक भागीदारांमधील करार.".to_owned(),
            price: 59.99,
            fields: vec![
                DocumentField::required("partners", "Partners Names", FieldKind::Textarea),
                DocumentField::required("businessName", "Business Name", FieldKind::Text),
                DocumentField::required("businessAddress", "Business Address", FieldKind::Text),
                DocumentField::required(
                    "capitalContribution",
                    "Capital Contribution Details",
                    FieldKind::Textarea,
                ),
            ],
            info: info(
                "भागीदारी करार हा दोन किंवा अधिक भागीदारांमधील लिखित करार आहे जो व्यवसायाचे नियम, नफा-तोटा वाटप आणि जबाबदाऱ्या स्पष्ट करतो.",
                "A Partnership Deed is a written legal document that outlines the rights, liabilities, and profit-sharing ratios of partners in a business firm.",
                &[
                    "Names and Address of all Partners / सर्व भागीदारांची नावे आणि पत्ते",
                    "Nature of Business / व्यवसायाचे स्वरूप",
                    "Address of Firm / व्यवसायाचा पत्ता",
                    "Capital Contribution Details / भांडवली योगदानाचा तपशील",
                    "Aadhaar and PAN of all partners / सर्व भागीदारांचे आधार आणि पॅन",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::TenancyAgreement,
            marathi_label: "भाडेकरू करार (Tenancy Agreement)".to_owned(),
            description: "Agreement between a landlord and a tenant for a short term stay."
                .to_owned(),
            marathi_description:
                "अल्प कालावधीसाठी वास्तव्यासाठी घरमालक आणि भाडेकरू यांच्यातील करार.".to_owned(),
            price: 24.99,
            fields: vec![
                DocumentField::required("landlordName", "Landlord Name", FieldKind::Text),
                DocumentField::required("tenantName", "Tenant Name", FieldKind::Text),
                DocumentField::required("address", "Property Address", FieldKind::Text),
                DocumentField::required("rent", "Rent Amount", FieldKind::Number),
            ],
            info: info(
                "टेनन्सी करारात घरमालक आणि भाडेकरू यांच्यातील अटी, जसे की भाडे, अनामत रक्कम (Deposit), आणि कालावधी नमूद केला जातो. हा सहसा ११ महिन्यांसाठी केला जातो.",
                "A Tenancy Agreement establishes the legal relationship between the landlord and tenant, outlining rights and responsibilities for a specific period.",
                &[
                    "Electricity Bill of Property / वीज बिल",
                    "Aadhaar Card of Owner and Tenant / मालक आणि भाडेकरूचे आधार कार्ड",
                    "Rent and Deposit Details / भाडे आणि डिपॉझिट तपशील",
                    "Witnesses / साक्षीदार",
                ],
            ),
        },
        DocumentTemplate {
            kind: DocumentKind::JointVentureAgreement,
            marathi_label: "संयुक्त उपक्रम करार (Joint Venture)".to_owned(),
            description: "Agreement for two parties to combine resources for a specific task."
                .to_owned(),
            marathi_description:
                "विशिष्ट कार्यासाठी संसाधने एकत्र करण्यासाठी दोन पक्षांमधील करार.".to_owned(),
            price: 69.99,
            fields: vec![
                DocumentField::required("partyA", "Party A Name", FieldKind::Text),
                DocumentField::required("partyB", "Party B Name", FieldKind::Text),
                DocumentField::required("project", "Project Description", FieldKind::Textarea),
                DocumentField::required("profitShare", "Profit Sharing Ratio", FieldKind::Text),
            ],
            info: info(
                "संयुक्त उपक्रम करार हा दोन किंवा अधिक पक्षांमध्ये एका विशिष्ट प्रकल्पासाठी संसाधने आणि नफा सामायिक करण्यासाठी केला जाणारा करार आहे.",
                "A Joint Venture Agreement is a contract between two or more parties to undertake a specific economic activity together, sharing risks and rewards.",
                &[
                    "Company Registration Documents / कंपनी नोंदणी दस्तऐवज",
                    "Board Resolution (if applicable) / बोर्ड ठराव",
                    "Identity Proof of Authorized Signatories / अधिकृत स्वाक्षरीकर्त्यांचे ओळखपत्र",
                    "Clear Terms of Partnership / भागीदारीच्या स्पष्ट अटी",
                ],
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_every_kind_resolves_to_matching_template() {
        for kind in DocumentKind::ALL {
            assert_eq!(template(kind).kind, kind);
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let found = find("gift deed").unwrap();
        assert_eq!(found.kind, DocumentKind::GiftDeed);
    }

    #[test]
    fn test_find_unknown_returns_none() {
        assert!(find("Quitclaim Deed").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_search_matches_description() {
        let matches = search("loan");
        assert!(matches.iter().any(|t| t.kind == DocumentKind::MortgageAgreement));
    }

    #[test]
    fn test_search_matches_marathi_label() {
        let matches = search("बक्षीस");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, DocumentKind::GiftDeed);
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        assert_eq!(search("").len(), DocumentKind::ALL.len());
    }

    #[test]
    fn test_total_price_adds_consultation_fee() {
        let gift = template(DocumentKind::GiftDeed);
        assert!((gift.total_price() - 34.99).abs() < 1e-9);
    }
}
