//! A small in-memory source tree shared by the unit tests.

use locc_markup::MarkupSource;
use locc_markup::MemorySource;

use crate::{CompileContext, CompileOptions};

pub(crate) const LCIDS: &str = r#"<lcids>
  <lcid name="en" id="0x0009" iso2="en" iso3="eng" win="ENU"/>
  <lcid name="en-US" id="0x0409" parent="0x0009" iso2="en" iso3="eng" win="ENU"/>
  <lcid name="es" id="0x000A" iso2="es" iso3="spa" win="ESP"/>
  <lcid name="es-ES" id="0x0C0A" parent="0x000A" iso2="es" iso3="spa" win="ESN"/>
  <lcid name="es-AQ" id="0x7C0A" parent="0x000A" iso2="es" iso3="spa" win="ESQ"/>
</lcids>"#;

pub(crate) const SUPPLEMENTAL_DATA: &str = r#"<supplementalData>
  <currencyData>
    <region iso3166="US"><currency iso4217="USD"/></region>
    <region iso3166="ES">
      <currency iso4217="ESP" to="2002-02-28"/>
      <currency iso4217="EUR"/>
    </region>
  </currencyData>
  <codeMappings>
    <territoryCodes type="US" alpha3="USA" win="USA"/>
    <territoryCodes type="ES" alpha3="ESP" win="ESP"/>
  </codeMappings>
</supplementalData>"#;

pub(crate) const TEXT_INFO: &str = r#"<textinfo>
  <culture lcid="0x0C0A" ansi="1252" ebcdic="20284" mac="10000" oem="850" listsep=";"/>
</textinfo>"#;

pub(crate) const ROOT: &str = r#"<ldml>
  <identity><language type="root"/></identity>
  <dates>
    <calendars>
      <calendar type="gregorian">
        <monthNames>
          <month>January</month><month>February</month><month>March</month>
          <month>April</month><month>May</month><month>June</month>
          <month>July</month><month>August</month><month>September</month>
          <month>October</month><month>November</month><month>December</month>
        </monthNames>
        <dayNames>
          <day>Sunday</day><day>Monday</day><day>Tuesday</day><day>Wednesday</day>
          <day>Thursday</day><day>Friday</day><day>Saturday</day>
        </dayNames>
        <am>AM</am>
        <pm>PM</pm>
        <dateFormats>
          <dateFormatLength type="full"><dateFormat><pattern>dddd, MMMM d, yyyy</pattern></dateFormat></dateFormatLength>
          <dateFormatLength type="long"><dateFormat><pattern>dddd, MMMM d, yyyy</pattern></dateFormat></dateFormatLength>
          <dateFormatLength type="short"><dateFormat><pattern>M/d/yyyy</pattern></dateFormat></dateFormatLength>
        </dateFormats>
        <timeFormats>
          <timeFormatLength type="long"><timeFormat><pattern>h:mm:ss a</pattern></timeFormat></timeFormatLength>
          <timeFormatLength type="short"><timeFormat><pattern>h:mm a</pattern></timeFormat></timeFormatLength>
        </timeFormats>
        <dateTimeFormats>
          <dateTimeFormatLength><dateTimeFormat><pattern>{1} {0}</pattern></dateTimeFormat></dateTimeFormatLength>
        </dateTimeFormats>
        <week><firstDay day="sun"/><minDays count="1"/></week>
      </calendar>
    </calendars>
    <symbols><dateSeparator>/</dateSeparator><timeSeparator>:</timeSeparator></symbols>
  </dates>
  <numbers>
    <symbols>
      <decimal>.</decimal><group>,</group><percentSign>%</percentSign>
      <plusSign>+</plusSign><minusSign>-</minusSign><perMille>‰</perMille>
      <infinity>Infinity</infinity><nan>NaN</nan>
    </symbols>
    <decimalFormats><decimalFormatLength><decimalFormat><pattern>#,##0.###</pattern></decimalFormat></decimalFormatLength></decimalFormats>
    <percentFormats><percentFormatLength><percentFormat><pattern>#,##0%</pattern></percentFormat></percentFormatLength></percentFormats>
    <currencyFormats><currencyFormatLength><currencyFormat><pattern>¤#,##0.00;(¤#,##0.00)</pattern></currencyFormat></currencyFormatLength></currencyFormats>
  </numbers>
</ldml>"#;

pub(crate) const SUPPLEMENTAL_ROOT: &str = "<ldml/>";

pub(crate) const EN: &str = r#"<ldml>
  <identity><language type="en"/></identity>
  <localeDisplayNames>
    <languages>
      <language type="en">English</language>
      <language type="es">Spanish</language>
    </languages>
    <territories>
      <territory type="US">United States</territory>
      <territory type="ES">Spain</territory>
    </territories>
  </localeDisplayNames>
  <numbers>
    <currencies>
      <currency type="USD"><displayName>US Dollar</displayName><symbol>$</symbol></currency>
      <currency type="EUR"><displayName>Euro</displayName><symbol>€</symbol></currency>
    </currencies>
  </numbers>
</ldml>"#;

pub(crate) const ES: &str = r#"<ldml>
  <identity><language type="es"/></identity>
  <localeDisplayNames>
    <languages>
      <language type="en">inglés</language>
      <language type="es">español</language>
    </languages>
    <territories>
      <territory type="ES">España</territory>
      <territory type="US">Estados Unidos</territory>
    </territories>
  </localeDisplayNames>
  <dates>
    <calendars>
      <calendar type="gregorian">
        <monthNames>
          <month>enero</month><month>febrero</month><month>marzo</month>
          <month>abril</month><month>mayo</month><month>junio</month>
          <month>julio</month><month>agosto</month><month>septiembre</month>
          <month>octubre</month><month>noviembre</month><month>diciembre</month>
        </monthNames>
        <dateFormats>
          <dateFormatLength type="long"><dateFormat><pattern>dddd, d' de 'MMMM' de 'yyyy</pattern></dateFormat></dateFormatLength>
          <dateFormatLength type="short"><dateFormat><pattern>d/M/yyyy</pattern></dateFormat></dateFormatLength>
        </dateFormats>
        <timeFormats>
          <timeFormatLength type="long"><timeFormat><pattern>H:mm:ss</pattern></timeFormat></timeFormatLength>
        </timeFormats>
      </calendar>
    </calendars>
  </dates>
  <numbers>
    <symbols><decimal>,</decimal><group>.</group></symbols>
  </numbers>
</ldml>"#;

pub(crate) const EN_US: &str = r#"<ldml>
  <identity><language type="en"/><territory type="US"/></identity>
  <numbers>
    <currencies><currency type="USD"><symbol>$</symbol></currency></currencies>
  </numbers>
</ldml>"#;

pub(crate) const ES_ES: &str = r#"<ldml>
  <identity><language type="es"/><territory type="ES"/></identity>
  <dates>
    <calendars>
      <calendar type="gregorian">
        <dateFormats>
          <dateFormatLength type="short"><dateFormat><pattern>dd/MM/yyyy</pattern></dateFormat></dateFormatLength>
        </dateFormats>
      </calendar>
    </calendars>
  </dates>
  <numbers>
    <currencyFormats><currencyFormatLength><currencyFormat><pattern>#,##0.00 ¤;-#,##0.00 ¤</pattern></currencyFormat></currencyFormatLength></currencyFormats>
    <currencies><currency type="EUR"><symbol>€</symbol></currency></currencies>
  </numbers>
</ldml>"#;

/// Antarctica has a numeric id but no currency mapping.
pub(crate) const ES_AQ: &str = r#"<ldml>
  <identity><language type="es"/><territory type="AQ"/></identity>
</ldml>"#;

/// No numeric id exists for this locale.
pub(crate) const XX_YY: &str = r#"<ldml>
  <identity><language type="xx"/><territory type="YY"/></identity>
</ldml>"#;

/// Root layers and side tables only.
pub(crate) fn base_source() -> MemorySource {
    MemorySource::new()
        .with("lcids.xml", LCIDS)
        .with("supplementalData.xml", SUPPLEMENTAL_DATA)
        .with("textinfo.xml", TEXT_INFO)
        .with("langs/root.xml", ROOT)
        .with("supp/root.xml", SUPPLEMENTAL_ROOT)
}

/// The full tree: two languages, four specific locales.
pub(crate) fn fixture() -> MemorySource {
    base_source()
        .with("langs/en.xml", EN)
        .with("langs/es.xml", ES)
        .with("locales/en_US.xml", EN_US)
        .with("locales/es_ES.xml", ES_ES)
        .with("locales/es_AQ.xml", ES_AQ)
        .with("locales/xx_YY.xml", XX_YY)
}

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) fn context(source: &dyn MarkupSource) -> CompileContext<'_> {
    CompileContext::new(source, CompileOptions::default()).unwrap()
}

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) fn parse(text: &str) -> locc_markup::Document {
    locc_markup::Document::parse("test.xml", text).unwrap()
}
