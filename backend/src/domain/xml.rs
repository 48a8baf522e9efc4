//! XML rendering of voter profiles and election tallies.
//!
//! Documents are assembled explicitly into a `String`: UTF-8 declaration
//! first, two-space indentation, and XML-escaped text content. Rendering is
//! infallible given validated input.

use crate::domain::User;
use crate::domain::tally::{PartyTally, tally_parties, winning_party};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Render a single profile as a standalone `<Users>` document.
///
/// The single-profile view carries no election tallies.
#[must_use]
pub fn user_document(user: &User) -> String {
    let mut out = String::from(XML_DECLARATION);
    out.push_str("<Users>\n");
    write_user(&mut out, user);
    out.push_str("</Users>\n");
    out
}

/// Render every profile plus the `<Elections>` tally block.
///
/// The block lists one `<PoliticalParty>` per distinct affiliation and a
/// `<Result>` naming the plurality winner; it is omitted entirely when no
/// profile declares an affiliation.
#[must_use]
pub fn users_document(users: &[User]) -> String {
    let mut out = String::from(XML_DECLARATION);
    out.push_str("<Users>\n");
    for user in users {
        write_user(&mut out, user);
    }
    let tallies = tally_parties(users);
    if let Some(winner) = winning_party(&tallies) {
        write_elections(&mut out, &tallies, winner);
    }
    out.push_str("</Users>\n");
    out
}

fn write_user(out: &mut String, user: &User) {
    out.push_str("  <User>\n");
    write_text_element(out, 2, "ID", user.id().as_ref());
    write_text_element(out, 2, "Name", user.name());
    write_text_element(out, 2, "Lastname", user.lastname());
    out.push_str("    <Address>\n");
    write_text_element(out, 3, "Provincia", user.address().provincia());
    write_text_element(out, 3, "Canton", user.address().canton());
    write_text_element(out, 3, "Distrito", user.address().distrito());
    out.push_str("    </Address>\n");
    out.push_str("    <Phones>\n");
    for phone in user.phones() {
        write_text_element(out, 3, "Phone", &phone.to_string());
    }
    out.push_str("    </Phones>\n");
    if let Some(party) = user.political_party() {
        write_text_element(out, 2, "PoliticalParty", party.as_ref());
    }
    out.push_str("  </User>\n");
}

fn write_elections(out: &mut String, tallies: &[PartyTally], winner: &PartyTally) {
    out.push_str("  <Elections>\n");
    for tally in tallies {
        out.push_str("    <PoliticalParty>\n");
        write_tally_body(out, tally);
        out.push_str("    </PoliticalParty>\n");
    }
    out.push_str("    <Result>\n");
    write_tally_body(out, winner);
    out.push_str("    </Result>\n");
    out.push_str("  </Elections>\n");
}

fn write_tally_body(out: &mut String, tally: &PartyTally) {
    write_text_element(out, 3, "Name", tally.party().as_ref());
    write_text_element(out, 3, "QuantityMembers", &tally.members().to_string());
}

fn write_text_element(out: &mut String, depth: usize, name: &str, text: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push('<');
    out.push_str(name);
    out.push('>');
    escape_into(out, text);
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
}
