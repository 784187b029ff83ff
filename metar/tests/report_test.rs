// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use metar::fields::Cover;
use metar::*;

const KJFK: &str = "METAR KJFK 181851Z 18005KT 10SM BKN030 OVC050 22/18 A2992 RMK AO2";

#[test]
fn parses_complete_report() {
    let report = Report::parse(KJFK);

    assert_eq!(report.time_str(), "18:51Z");
    assert_eq!(report.wind_direction_str(), "180°");
    assert_eq!(report.wind_speed_str(), "05KT");
    assert_eq!(report.visibility_str(), "10");
    assert_eq!(report.altimeter_str(), "29.92");
    assert_eq!(report.temperature_str(), "22");
    assert_eq!(report.dewpoint_str(), "18");
    assert_eq!(report.clouds_summary(), "BKN030 OVC050");
    assert_eq!(report.clouds[0].cover(), Cover::Broken);
    assert_eq!(report.clouds[0].as_str(), "BKN030");
    assert_eq!(report.ceiling(), 30);
    assert_eq!(report.flight_rules, FlightRules::Vfr);
    assert!(report.remainder.is_empty());
}

#[test]
fn parsing_is_idempotent() {
    assert_eq!(Report::parse(KJFK), Report::parse(KJFK));
}

#[test]
fn missing_fields_get_sentinels() {
    let report = Report::parse("KJFK BKN030 22/18");

    assert_eq!(report.altimeter_str(), ALTIMETER_SENTINEL);
    assert_eq!(report.time_str(), TIME_SENTINEL);
    assert_eq!(report.wind_direction_str(), WIND_DIRECTION_SENTINEL);
    assert_eq!(report.wind_speed_str(), WIND_SPEED_SENTINEL);
    assert_eq!(report.visibility_str(), VISIBILITY_SENTINEL);
    assert_eq!(report.temperature_str(), "22");
    assert_eq!(report.clouds_summary(), "BKN030");
    assert_eq!(report.flight_rules, FlightRules::Ifr);
}

#[test]
fn sentinels_dont_leak_between_reports() {
    let complete = Report::parse(KJFK);
    assert_eq!(complete.altimeter_str(), "29.92");

    let sparse = Report::parse("KJFK 181851Z 18005KT 10SM 22/18");
    assert_eq!(sparse.altimeter_str(), ALTIMETER_SENTINEL);
    assert_eq!(sparse.time_str(), "18:51Z");
    assert_eq!(sparse.clouds_summary(), "");
    assert_eq!(sparse.flight_rules, FlightRules::Vfr);
}

#[test]
fn empty_report_is_ifr() {
    let report = Report::parse("");

    assert_eq!(report.temperature_str(), TEMPERATURE_SENTINEL);
    assert_eq!(report.dewpoint_str(), TEMPERATURE_SENTINEL);
    assert!(report.clouds.is_empty());
    assert_eq!(report.flight_rules, FlightRules::Ifr);
}

#[test]
fn parses_automated_report() {
    let report = Report::parse(
        "KBOS 031354Z AUTO 24015G25KT 210V270 1 1/2SM R04R/2000FT -RA BR SCT004 OVC009 M01/M03 A2975 RMK AO2",
    );

    assert_eq!(report.time_str(), "13:54Z");
    assert_eq!(report.wind_speed_str(), "15G25KT");
    assert_eq!(report.wind.as_ref().and_then(|w| w.gusts()), Some(25));
    assert_eq!(report.visibility_str(), "1.5");
    assert_eq!(report.temperature_str(), "-01");
    assert_eq!(report.dewpoint_str(), "-03");
    assert_eq!(report.altimeter_str(), "29.75");
    assert_eq!(report.clouds_summary(), "SCT004 OVC009");
    assert_eq!(report.ceiling(), 9);
    assert_eq!(report.remainder, vec!["-RA", "BR"]);
    assert_eq!(report.flight_rules, FlightRules::Ifr);
}

#[test]
fn parses_metric_visibility() {
    let report = Report::parse("EDDH 181850Z 27010KT 9999 FEW030 12/08 Q1013");

    assert_eq!(report.visibility_str(), "10");
    // QNH is no altimeter setting and isn't claimed as temperature either
    assert_eq!(report.altimeter_str(), ALTIMETER_SENTINEL);
    assert_eq!(report.temperature_str(), TEMPERATURE_SENTINEL);
    assert_eq!(report.remainder, vec!["12/08", "Q1013"]);
    assert_eq!(report.flight_rules, FlightRules::Vfr);
}

#[test]
fn classifies_low_visibility() {
    let report = Report::parse("KSFO 181856Z 00000KT 1/4SM FG VV002 12/12 A3001");

    assert_eq!(report.visibility_str(), ".25");
    assert_eq!(report.clouds_summary(), "VV002");
    assert_eq!(report.ceiling(), 2);
    assert_eq!(report.flight_rules, FlightRules::Lifr);
}

#[test]
fn classifies_marginal_ceiling() {
    let report = Report::parse("KDEN 181853Z 36008KT 10SM BKN025 OVC040 05/M02 A3010");
    assert_eq!(report.flight_rules, FlightRules::Mvfr);

    let report = Report::parse("KDEN 181853Z 36008KT 4SM BR 05/M02 A3010");
    assert_eq!(report.flight_rules, FlightRules::Mvfr);
}

#[test]
fn skipped_token_may_be_a_field() {
    // without the station in front, the time is skipped in its place
    let report = Report::parse("181851Z 18005KT 10SM BKN030 22/18 A2992");

    assert_eq!(report.time_str(), TIME_SENTINEL);
    assert_eq!(report.wind_direction_str(), "180°");
    assert_eq!(report.visibility_str(), "10");
    assert_eq!(report.flight_rules, FlightRules::Vfr);
}

#[test]
fn clear_marker_is_no_layer() {
    let report = Report::parse("KJFK 181851Z 18005KT 10SM CLR 22/18 A2992");

    assert!(report.clouds.is_empty());
    assert_eq!(report.ceiling(), rules::UNLIMITED_CEILING);
    assert_eq!(report.flight_rules, FlightRules::Vfr);
}

#[test]
fn missing_time_keeps_wind_and_visibility() {
    let report = Report::parse("KJFK 18005KT 10SM BKN030 22/18 A2992");

    assert_eq!(report.time_str(), TIME_SENTINEL);
    assert_eq!(report.wind_direction_str(), "180°");
    assert_eq!(report.wind_speed_str(), "05KT");
    assert_eq!(report.visibility_str(), "10");
    assert_eq!(report.altimeter_str(), "29.92");
    assert_eq!(report.flight_rules, FlightRules::Vfr);
}

#[test]
fn missing_wind_keeps_time_and_visibility() {
    let report = Report::parse("KJFK 181851Z 10SM BKN030 22/18 A2992");

    assert_eq!(report.time_str(), "18:51Z");
    assert_eq!(report.wind_direction_str(), WIND_DIRECTION_SENTINEL);
    assert_eq!(report.wind_speed_str(), WIND_SPEED_SENTINEL);
    assert_eq!(report.visibility_str(), "10");
    assert_eq!(report.clouds_summary(), "BKN030");
    assert_eq!(report.flight_rules, FlightRules::Vfr);
}

#[test]
fn missing_visibility_keeps_other_fields() {
    let report = Report::parse("KJFK 181851Z 18005KT BKN030 22/18 A2992");

    assert_eq!(report.visibility_str(), VISIBILITY_SENTINEL);
    assert_eq!(report.time_str(), "18:51Z");
    assert_eq!(report.wind_direction_str(), "180°");
    assert_eq!(report.wind_speed_str(), "05KT");
    assert_eq!(report.clouds_summary(), "BKN030");
    assert_eq!(report.temperature_str(), "22");
    assert_eq!(report.dewpoint_str(), "18");
    assert_eq!(report.altimeter_str(), "29.92");
    assert_eq!(report.flight_rules, FlightRules::Ifr);
}
