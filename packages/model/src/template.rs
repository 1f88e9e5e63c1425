//! Blank CSV input template offered for download on the input form.

/// Rows of the input template: (input name, example value).
pub const TEMPLATE_ROWS: &[(&str, &str)] = &[
    ("client_name", "ACME Corp"),
    ("assessment_date", "2025-05-04"),
    ("analyst_name", "Jane Doe"),
    ("assessment_scope", "Full IT Environment"),
    ("baseline_revenue", "150000000"),
    ("it_expense", "12000000"),
    ("architecture_components", "AWS EC2, NetApp, VMware"),
    ("hardware_expense", "2500000"),
    ("software_expense", "1800000"),
    ("cybersecurity_expense", "1400000"),
    ("maintenance_expense", "900000"),
    ("telecom_expense", "700000"),
    ("personnel_expense", "4000000"),
    ("bcdr_expense", "800000"),
    ("component_maturity_scores", "NetApp:4, AWS:3"),
    ("component_risk_flags", "NetApp:False, AWS:True"),
    ("criticality_score", "NetApp:High, AWS:Medium"),
];

/// Render the template as CSV. Example values containing commas are quoted.
pub fn input_template_csv() -> String {
    let mut csv = String::from("Input Name,Example Value\n");
    for (name, example) in TEMPLATE_ROWS {
        if example.contains(',') {
            csv.push_str(&format!("{},\"{}\"\n", name, example));
        } else {
            csv.push_str(&format!("{},{}\n", name, example));
        }
    }
    csv
}
