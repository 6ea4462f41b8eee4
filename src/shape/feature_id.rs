/// An identifier of a feature of a shape.
///
/// This identifier is shape-dependent. For a [`Cuboid`](crate::shape::Cuboid)
/// it identifies one of its four faces or four corners.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum FeatureId {
    /// Shape-dependent identifier of a vertex.
    Vertex(u32),
    /// Shape-dependent identifier of a face.
    Face(u32),
}

impl FeatureId {
    /// Is this identifier a vertex?
    #[inline]
    pub fn is_vertex(self) -> bool {
        matches!(self, FeatureId::Vertex(_))
    }

    /// Is this identifier a face?
    #[inline]
    pub fn is_face(self) -> bool {
        matches!(self, FeatureId::Face(_))
    }

    /// Retrieves the value of the identifier if `self` is a vertex.
    pub fn unwrap_vertex(self) -> u32 {
        match self {
            FeatureId::Vertex(id) => id,
            _ => panic!("The feature id does not identify a vertex."),
        }
    }

    /// Retrieves the value of the identifier if `self` is a face.
    pub fn unwrap_face(self) -> u32 {
        match self {
            FeatureId::Face(id) => id,
            _ => panic!("The feature id does not identify a face."),
        }
    }
}
