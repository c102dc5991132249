use anyhow::{Context as _, anyhow};
use kuchiki::NodeRef;
use kuchiki::iter::NodeIterator as _;
use kuchiki::traits::TendrilSink as _;

/// Destination for rendered rows. A call replaces everything written before.
pub trait RowSink {
    fn replace_rows(&mut self, rows: &str) -> anyhow::Result<()>;
}

impl RowSink for String {
    fn replace_rows(&mut self, rows: &str) -> anyhow::Result<()> {
        self.clear();
        self.push_str(rows);
        Ok(())
    }
}

/// An HTML page with one designated container element that receives the rows.
pub struct PageDocument {
    document: NodeRef,
    container: NodeRef,
}

impl PageDocument {
    /// Fails when the page has no element with `container_id`.
    pub fn parse(html: &str, container_id: &str) -> anyhow::Result<Self> {
        let document = kuchiki::parse_html().one(html);
        let container = find_by_id(&document, container_id)
            .ok_or_else(|| anyhow!("page has no element with id \"{container_id}\""))?;
        Ok(Self {
            document,
            container,
        })
    }

    /// Same check as [`PageDocument::parse`] without keeping the document.
    pub fn ensure_container(html: &str, container_id: &str) -> anyhow::Result<()> {
        Self::parse(html, container_id).map(drop)
    }

    pub fn container_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        for child in self.container.children() {
            child
                .serialize(&mut out)
                .context("serialize container child")?;
        }
        String::from_utf8(out).context("container html not utf-8")
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.document
            .serialize(&mut out)
            .context("serialize page")?;
        String::from_utf8(out).context("page html not utf-8")
    }
}

// Compared literally: ids are not guaranteed to be valid CSS selectors.
fn find_by_id(document: &NodeRef, id: &str) -> Option<NodeRef> {
    document
        .descendants()
        .elements()
        .find(|element| element.attributes.borrow().get("id") == Some(id))
        .map(|element| element.as_node().clone())
}

impl RowSink for PageDocument {
    fn replace_rows(&mut self, rows: &str) -> anyhow::Result<()> {
        // `<tr>` only survives parsing inside a table.
        let fragment = kuchiki::parse_html().one(format!("<table><tbody>{rows}</tbody></table>"));
        let body = fragment
            .select_first("tbody")
            .map_err(|_| anyhow!("rows fragment has no tbody"))?;
        let new_children: Vec<NodeRef> = body.as_node().children().collect();

        let old_children: Vec<NodeRef> = self.container.children().collect();
        for child in old_children {
            child.detach();
        }
        for child in new_children {
            self.container.append(child);
        }
        Ok(())
    }
}
