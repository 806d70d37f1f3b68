use super::{Rect, Vec2};

/// One element of a [`Path`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Closes the current contour back to its `MoveTo` point.
    Close,
}

/// Polygonal path made of straight segments.
///
/// Built with `move_to` / `line_to` / `close` the way a canvas path is.
/// Filling uses the non-zero winding rule; open contours are closed
/// implicitly when filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: closed polygon through `points`.
    pub fn polygon(points: &[Vec2]) -> Self {
        let mut path = Path::new();
        if let Some((&first, rest)) = points.split_first() {
            path.move_to(first);
            for &p in rest {
                path.line_to(p);
            }
            path.close();
        }
        path
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.els.push(PathEl::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.els.push(PathEl::LineTo(p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.els.push(PathEl::Close);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// Returns `true` if every contour ends with [`PathEl::Close`].
    pub fn is_closed(&self) -> bool {
        let mut open = false;
        for el in &self.els {
            match el {
                PathEl::MoveTo(_) => {
                    if open {
                        return false;
                    }
                    open = true;
                }
                PathEl::LineTo(_) => {}
                PathEl::Close => open = false,
            }
        }
        !open
    }

    /// Distinct vertices in path order.
    ///
    /// A `LineTo` that returns to the contour's start point is not repeated.
    pub fn vertices(&self) -> Vec<Vec2> {
        let mut out = Vec::new();
        let mut start = None;
        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) => {
                    start = Some(p);
                    out.push(p);
                }
                PathEl::LineTo(p) if Some(p) == start => {}
                PathEl::LineTo(p) => out.push(p),
                PathEl::Close => {}
            }
        }
        out
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(&self.vertices())
    }

    /// Straight segments of every contour, including implicit closing edges.
    pub fn segments(&self) -> Vec<(Vec2, Vec2)> {
        let mut segs = Vec::new();
        let mut start: Option<Vec2> = None;
        let mut last: Option<Vec2> = None;

        let close_contour = |start: Option<Vec2>, last: Option<Vec2>, segs: &mut Vec<_>| {
            if let (Some(s), Some(l)) = (start, last) {
                if s != l {
                    segs.push((l, s));
                }
            }
        };

        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) => {
                    close_contour(start, last, &mut segs);
                    start = Some(p);
                    last = Some(p);
                }
                PathEl::LineTo(p) => {
                    if let Some(l) = last {
                        segs.push((l, p));
                    } else {
                        start = Some(p);
                    }
                    last = Some(p);
                }
                PathEl::Close => {
                    close_contour(start, last, &mut segs);
                    last = start;
                }
            }
        }
        close_contour(start, last, &mut segs);
        segs
    }

    /// Non-zero winding containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        Self::winding_number(&self.segments(), p) != 0
    }

    /// Winding number of `p` with respect to `segments` (as returned by
    /// [`segments`](Self::segments)). Lets callers that test many points
    /// flatten the path once.
    pub fn winding_number(segments: &[(Vec2, Vec2)], p: Vec2) -> i32 {
        let mut winding = 0;
        for &(a, b) in segments {
            if a.y <= p.y {
                if b.y > p.y && cross(a, b, p) > 0.0 {
                    winding += 1;
                }
            } else if b.y <= p.y && cross(a, b, p) < 0.0 {
                winding -= 1;
            }
        }
        winding
    }
}

/// Which side of the directed line `a → b` the point `p` is on.
#[inline]
fn cross(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}
