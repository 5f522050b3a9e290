//! End-to-end tests: raw export bytes to serialized dashboard.

use fidash_holdings::{process_holdings, AggregationConfig};
use fidash_report::{
    build_dashboard, Chart, DashboardLayout, COUNTRY_EXPOSURE_TITLE, RATING_EXPOSURE_TITLE,
    TOP_HOLDINGS_TITLE, TOP_ISSUERS_TITLE,
};

const EXPORT: &str = "\
Global Credit Fund
As of 30/09/2024
Share class: I Acc
Currency: USD
Holdings
Source: administrator
Security Name,Weight (%),Rating,Country,Issuer,Security Type
Apple 3.85% 2043,0.75,AA+,US,Apple Inc,Corporate Bonds
US Treasury 4% 2030,4.20,AAA,US,United States Treasury,Government Bonds
HSBC 4.3% 2026,0.48,A-,UK,HSBC Holdings,Corporate Bonds
Microsoft 2.4% 2026,0.38,AAA,US,Microsoft Corp,Corporate Bonds
Cash USD,1.10,,US,Cash,Cash
Royal Bank 1.6% 2027,0.46,A,Canada,Royal Bank of Canada,Corporate Bonds
";

fn dashboard() -> fidash_report::Dashboard {
    let views = process_holdings(EXPORT.as_bytes(), &AggregationConfig::default()).unwrap();
    build_dashboard(&views, &DashboardLayout::default())
}

#[test]
fn test_country_pie_matches_view() {
    let dashboard = dashboard();

    match &dashboard.panel(COUNTRY_EXPOSURE_TITLE).unwrap().chart {
        Chart::Pie(pie) => {
            assert_eq!(pie.labels, vec!["US", "UK", "Canada"]);
            assert_eq!(pie.values, vec![1.13, 0.48, 0.46]);
            assert_eq!(pie.pull, vec![0.1, 0.1, 0.1]);
        }
        other => panic!("expected pie chart, got {other:?}"),
    }
}

#[test]
fn test_rating_pie_excludes_other_types() {
    let dashboard = dashboard();

    match &dashboard.panel(RATING_EXPOSURE_TITLE).unwrap().chart {
        Chart::Pie(pie) => {
            assert_eq!(pie.labels, vec!["AA+", "A-", "A", "AAA"]);
            assert!(!pie.labels.iter().any(|l| l.is_empty()));
        }
        other => panic!("expected pie chart, got {other:?}"),
    }
}

#[test]
fn test_issuer_bars_ascending() {
    let dashboard = dashboard();

    match &dashboard.panel(TOP_ISSUERS_TITLE).unwrap().chart {
        Chart::Bar(bar) => {
            assert_eq!(
                bar.categories,
                vec!["Microsoft Corp", "Royal Bank of Canada", "HSBC Holdings", "Apple Inc"]
            );
            assert_eq!(bar.text, vec!["0.38%", "0.46%", "0.48%", "0.75%"]);
            assert_eq!(bar.axes.x, "Weight (%)");
        }
        other => panic!("expected bar chart, got {other:?}"),
    }
}

#[test]
fn test_holding_bars_descending() {
    let dashboard = dashboard();

    match &dashboard.panel(TOP_HOLDINGS_TITLE).unwrap().chart {
        Chart::Bar(bar) => {
            assert_eq!(bar.categories[0], "Apple 3.85% 2043");
            assert_eq!(bar.len(), 4);
            assert!(bar.values.windows(2).all(|w| w[0] >= w[1]));
        }
        other => panic!("expected bar chart, got {other:?}"),
    }
}

#[test]
fn test_dashboard_serializes() {
    let json = serde_json::to_value(dashboard()).unwrap();

    assert_eq!(json["layout"]["title"], "Fixed Income Fund Analysis Dashboard");
    assert_eq!(json["layout"]["width"], 1200);
    assert_eq!(json["panels"].as_array().unwrap().len(), 4);
    assert_eq!(json["panels"][0]["chart"]["type"], "pie");
    assert_eq!(json["panels"][2]["chart"]["orientation"], "horizontal");
    assert_eq!(json["panels"][3]["position"]["colspan"], 2);
}

#[test]
fn test_no_corporate_rows_gives_empty_dashboard() {
    let export = EXPORT.replace("Corporate Bonds", "Agency Bonds");
    let views = process_holdings(export.as_bytes(), &AggregationConfig::default()).unwrap();
    let dashboard = build_dashboard(&views, &DashboardLayout::default());

    assert_eq!(dashboard.panels.len(), 4);
    assert!(dashboard.is_empty());
}
