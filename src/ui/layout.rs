//! Flex row-wrap layout with `space-evenly` distribution on both axes.
//!
//! Items fill a row left to right and wrap when the next one would not
//! fit. Leftover space in a row is split into `n + 1` equal slots around
//! its `n` items; leftover height is split the same way around the rows.
//! Items are centred vertically within their row.

use crate::config::MAX_BUTTONS;
use crate::error::Error;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlexGrid {
    pub padding: u32,
    pub column_gap: u32,
    pub row_gap: u32,
}

/// Half-open index range of the items in one row, plus its extent.
#[derive(Clone, Copy)]
struct Row {
    start: usize,
    end: usize,
    width: u32,
    height: u32,
}

impl FlexGrid {
    pub const fn new(padding: u32, column_gap: u32, row_gap: u32) -> Self {
        Self {
            padding,
            column_gap,
            row_gap,
        }
    }

    /// Place items of the given sizes inside `container`.
    pub fn arrange(
        &self,
        container: Rectangle,
        sizes: &[Size],
    ) -> Result<Vec<Rectangle, MAX_BUTTONS>, Error> {
        if sizes.len() > MAX_BUTTONS {
            return Err(Error::Layout);
        }

        let content = self.content_area(container);
        let rows = self.wrap(content.size.width, sizes);

        let mut placed = Vec::new();
        if rows.is_empty() {
            return Ok(placed);
        }

        let total_height = rows.iter().map(|r| r.height).sum::<u32>()
            + self.row_gap * (rows.len() as u32 - 1);
        let row_slot =
            content.size.height.saturating_sub(total_height) / (rows.len() as u32 + 1);

        let mut y = content.top_left.y + row_slot as i32;
        for row in &rows {
            let items = &sizes[row.start..row.end];
            let item_slot =
                content.size.width.saturating_sub(row.width) / (items.len() as u32 + 1);

            let mut x = content.top_left.x + item_slot as i32;
            for size in items {
                let dy = (row.height - size.height) / 2;
                let rect = Rectangle::new(Point::new(x, y + dy as i32), *size);
                placed.push(rect).map_err(|_| Error::Layout)?;
                x += (size.width + self.column_gap + item_slot) as i32;
            }

            y += (row.height + self.row_gap + row_slot) as i32;
        }

        Ok(placed)
    }

    /// Container minus padding on every side.
    pub fn content_area(&self, container: Rectangle) -> Rectangle {
        let inset = self.padding as i32;
        Rectangle::new(
            container.top_left + Point::new(inset, inset),
            Size::new(
                container.size.width.saturating_sub(2 * self.padding),
                container.size.height.saturating_sub(2 * self.padding),
            ),
        )
    }

    fn wrap(&self, max_width: u32, sizes: &[Size]) -> Vec<Row, MAX_BUTTONS> {
        let mut rows: Vec<Row, MAX_BUTTONS> = Vec::new();
        let mut current: Option<Row> = None;

        for (i, size) in sizes.iter().enumerate() {
            current = match current {
                Some(mut row) if row.width + self.column_gap + size.width <= max_width => {
                    row.end = i + 1;
                    row.width += self.column_gap + size.width;
                    row.height = row.height.max(size.height);
                    Some(row)
                }
                previous => {
                    if let Some(row) = previous {
                        // Capacity matches MAX_BUTTONS, checked by the caller.
                        let _ = rows.push(row);
                    }
                    Some(Row {
                        start: i,
                        end: i + 1,
                        width: size.width,
                        height: size.height,
                    })
                }
            };
        }

        if let Some(row) = current {
            let _ = rows.push(row);
        }
        rows
    }
}
